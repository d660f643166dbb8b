//! Canned HTML notices for the informational commands.

use crate::error::Result;
use crate::models::Message;

use super::html_to_text;

const ROOMS_HTML: &str = r#"
General &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezos:matrix.org">#tezos:matrix.org</a><br>
Tech &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#freenode_#tezos:matrix.org">#freenode_#tezos:matrix.org</a><br>
Media &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezosmedia:matrix.org">#tezosmedia:matrix.org</a><br>
Trading &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezostrader:matrix.org">#tezostrader:matrix.org</a><br>
PermaBulls (Trading) &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezostrader:tzchat.org">#tezostrader:tzchat.org</a><br>
Random &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezosrandom:matrix.org">#tezosrandom:matrix.org</a><br>
Philosophy &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezosphilosophy:matrix.org">#tezosphilosophy:matrix.org</a><br>
Governance &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezosgovernance:matrix.org">#tezosgovernance:matrix.org</a><br>
Ideas and Collaboration &nbsp;&nbsp;&nbsp; <a href="https://riot.im/app/#/room/#tezosfoundry:matrix.org">#tezosfoundry:matrix.org</a><br>
"#;

const SITES_HTML: &str = r#"
Tezos Developer Documentation: <a href="http://doc.tzalpha.net/">doc.tzalpha.net</a><br>
Tezos development repository: <a href="https://gitlab.com/tezos/tezos">gitlab.com/tezos/tezos</a><br>
Tezos Commons Foundation: <a href="https://tezoscommons.org/">tezoscommons.org</a><br>
Tezos Community: <a href="https://www.tezos.community/">www.tezos.community</a><br>
Tezos rocks: <a href="https://tezos.rocks/">tezos.rocks</a><br>
Tezos help: <a href="http://www.tezos.help/">www.tezos.help</a><br>
"#;

const TEZOS_HTML: &str = r#"
Official Tezos sites:<br>
https://www.tezosfoundation.ch<br>
https://www.reddit.com/user/TezosReddit<br>
https://twitter.com/TezosFoundation<br>
https://tezos.com<br>
"#;

const DEV_SITES_HTML: &str = r#"
Developer sites:<br>
<a href="http://doc.tzalpha.net">Core dev docs</a><br>
<a href="https://gitlab.com/tezos/tezos">Core dev repo</a><br>
<a href="https://github.com/tezoscommunity/FAQ/blob/master/Compile_Betanet.md">Compile Betanet</a><br>
<a href="https://github.com/tezoscommunity/FAQ/blob/master/Rebuilding_Betanet.md">Rebuilding Betanet</a><br>
<a href="https://gist.github.com/dakk/bdf6efe42ae920acc660b20080a506dd">Baking howto</a><br>
<a href="https://github.com/obsidiansystems/ledger-app-tezos/blob/master/README.md">Ledger Applications</a><br>
"#;

const MIGRATE_HTML: &str = r#"
<h3>Migrate Tezbox Wallet to Galleon</h3>
<p>
Tezbox is no longer actively supported and we recommend users migrate to Galleon wallet. Users with Nano Ledger hardware wallets can use Galleon by changing the derivation path to Tezbox under settings before connecting.
</p>
<ol>
<li>Set RPC Server to Giganode
<br>
Go to Tezbox settings and change the server:
<br>
https://mainnet-tezos.giganode.io

<li>Download Galleon Wallet
<br>
https://cryptonomic.tech/galleon.html

<li>Follow Tezbox to Galleon Migration Guide
<br>
https://www.youtube.com/watch?v=fLnOcezCZU0
</ol>
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Rooms,
    Sites,
    Tezos,
    DevSites,
    Migrate,
}

impl Page {
    pub fn html(self) -> &'static str {
        match self {
            Page::Rooms => ROOMS_HTML,
            Page::Sites => SITES_HTML,
            Page::Tezos => TEZOS_HTML,
            Page::DevSites => DEV_SITES_HTML,
            Page::Migrate => MIGRATE_HTML,
        }
    }

    pub fn message(self) -> Result<Message> {
        let html = self.html();
        Ok(Message::html_notice(html, html_to_text(html)?))
    }
}
