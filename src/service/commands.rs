use crate::render::Page;

/// What a command does once the host routed `!path args...` to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Repeat the arguments back.
    Echo,
    Page(Page),
    /// Raw HitBTC public API query, path segments joined with `/`.
    HitBtc,
    HitBtcTicker,
    /// Last HitBTC price of the configured pair.
    Iou,
    Cmc1,
    Cmc2,
    CmcPro,
    Top { extended: bool },
    Neighbors,
    KnockKnock,
    Reply(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub path: &'static str,
    pub action: Action,
}

const fn command(path: &'static str, action: Action) -> Command {
    Command { path, action }
}

const fn reply(path: &'static str, text: &'static str) -> Command {
    Command {
        path,
        action: Action::Reply(text),
    }
}

pub const COMMANDS: &[Command] = &[
    command("t3bot", Action::Echo),
    command("rooms", Action::Page(Page::Rooms)),
    command("sites", Action::Page(Page::Sites)),
    command("tezos", Action::Page(Page::Tezos)),
    command("devsites", Action::Page(Page::DevSites)),
    command("migrate", Action::Page(Page::Migrate)),
    command("hitbtc", Action::HitBtc),
    command("ticker", Action::HitBtcTicker),
    command("iou", Action::Iou),
    command("cmc1", Action::Cmc1),
    command("cmc2", Action::Cmc2),
    command("cmc", Action::CmcPro),
    command("cmcp", Action::CmcPro),
    command("top", Action::Top { extended: false }),
    command("toƿ", Action::Top { extended: true }),
    command("neighbors", Action::Neighbors),
    command("knockknock", Action::KnockKnock),
    reply("mom-am-i-rich-yet", "Not yet, dear one. Go back to work."),
    reply("bear", "ʕ ·(エ)· ʔ"),
    reply("bull", "ᓷ( ఠൠఠ )ᓸ"),
    reply("cub", "ʕ •ᴥ•ʔ"),
    reply("koala", "ʕ •ᴥ•ʔ"),
    reply("seal", "(◕ᴥ◕)"),
    reply("whale", ". ><(((.______)"),
    reply("otter", "(:ᘌꇤ⁐  三"),
    reply("shrug", r"¯\_(ツ)_/¯"),
    reply("dealwithit", "(•_•)   ( •_•)>⌐■-■    (⌐■_■)"),
    reply("disapprove", "ಠ_ಠ"),
    reply("skeptical", "ಠಿ_ಠ"),
    reply("flip", "(╯°□°）╯︵ ┻━┻"),
    reply("moon", "┗(°0°)┛"),
    reply("cthulhu", "^(;,;)^"),
    reply("fhqwhgads", "Everybody. TO THE LIMIT."),
];

pub fn find_command(path: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.path == path)
}
