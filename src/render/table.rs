use crate::error::Result;
use crate::models::{CmcTicker, CmcTicker2, Message, ProListing};

use super::format::{
    format_millions, format_millions_decimal, format_percent, format_price,
};
use super::html_to_text;

const THEAD: &str = "<thead><tr>
<th>symbol</th>
<th>Latest (USD)</th>
<th>1H %Δ</th>
<th>24H %Δ</th>
<th>7D %Δ</th>
<th>Rank</th>
<th>Mkt Cap (M USD)</th>
</tr></thead>";

/// One formatted row of the ticker table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRow {
    pub symbol: String,
    pub price: String,
    pub change_1h: String,
    pub change_24h: String,
    pub change_7d: String,
    pub rank: String,
    pub market_cap: String,
}

impl TickerRow {
    fn to_html(&self) -> String {
        format!(
            "<tr>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td>{}</td>
<td>{}</td>
</tr>",
            self.symbol,
            self.price,
            self.change_1h,
            self.change_24h,
            self.change_7d,
            self.rank,
            self.market_cap
        )
    }
}

impl From<&ProListing> for TickerRow {
    fn from(listing: &ProListing) -> Self {
        let usd = &listing.quote.usd;
        Self {
            symbol: listing.symbol.clone(),
            price: usd.price.map(format_price).unwrap_or_else(|| "?".to_string()),
            change_1h: format_percent(usd.percent_change_1h),
            change_24h: format_percent(usd.percent_change_24h),
            change_7d: format_percent(usd.percent_change_7d),
            rank: listing.cmc_rank.to_string(),
            market_cap: format_millions(usd.market_cap),
        }
    }
}

impl From<&CmcTicker2> for TickerRow {
    fn from(ticker: &CmcTicker2) -> Self {
        let usd = &ticker.quotes.usd;
        Self {
            symbol: ticker.symbol.clone(),
            price: usd.price.map(format_price).unwrap_or_else(|| "?".to_string()),
            change_1h: format_percent(usd.percent_change_1h),
            change_24h: format_percent(usd.percent_change_24h),
            change_7d: format_percent(usd.percent_change_7d),
            rank: ticker.rank.to_string(),
            market_cap: format_millions(usd.market_cap),
        }
    }
}

/// v1 values are already strings and are shown as sent.
impl From<&CmcTicker> for TickerRow {
    fn from(ticker: &CmcTicker) -> Self {
        let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| "?".to_string());
        Self {
            symbol: ticker.symbol.clone(),
            price: or_unknown(&ticker.price_usd),
            change_1h: or_unknown(&ticker.percent_change_1h),
            change_24h: or_unknown(&ticker.percent_change_24h),
            change_7d: or_unknown(&ticker.percent_change_7d),
            rank: ticker.rank.clone(),
            market_cap: format_millions_decimal(ticker.market_cap_usd.as_deref()),
        }
    }
}

pub fn tickers_table_html(rows: &[TickerRow]) -> String {
    let tbody: String = rows.iter().map(TickerRow::to_html).collect();
    format!("<table>{THEAD}<tbody>{tbody}</tbody></table>")
}

/// HTML table for clients that render it, with a text table as the
/// fallback body.
pub fn display_tickers<'a, T>(tickers: &'a [T]) -> Result<Message>
where
    TickerRow: From<&'a T>,
{
    let rows: Vec<TickerRow> = tickers.iter().map(TickerRow::from).collect();
    let table = tickers_table_html(&rows);
    let text = html_to_text(&table)?;
    Ok(Message::html_notice(table, text))
}
