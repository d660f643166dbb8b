mod coin;
mod message;
mod ticker;

pub use coin::{
    CmcListing2, CmcListingResponse2, CmcMetadata2, CmcTicker, CmcTicker2, CmcTickerResponse2,
    ProListing, ProListingResponse, ProMapItem, ProMapResponse, ProQuote, ProStatus, ProUsdQuote,
    Quotes2, UsdQuote2,
};
pub use message::{Message, FORMAT_HTML, MSGTYPE_NOTICE};
pub use ticker::HitBtcTicker;
