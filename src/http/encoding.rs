use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

/// Content codings the server will select during negotiation.
///
/// Only `Gzip` is ever applied to a body. Selecting any other scheme still
/// puts its name in `Content-Encoding`, while the body goes out as-is.
#[derive(EnumString, IntoStaticStr, Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum Encoding {
    #[strum(serialize = "gzip")]
    Gzip,
    #[strum(serialize = "deflate")]
    Deflate,
    #[strum(serialize = "exi")]
    Exi,
    #[strum(serialize = "identity")]
    Identity,
    #[strum(serialize = "pack200-gzip")]
    Pack200Gzip,
    #[strum(serialize = "br")]
    Br,
    #[strum(serialize = "compress")]
    Compress,
    #[strum(serialize = "zstd")]
    Zstd,
}

/// Picks the first comma-separated token of an Accept-Encoding value that
/// names a known scheme. Tokens must match exactly after trimming, so
/// `gzip;q=0.5` is not a match.
pub fn negotiate(header: &str) -> Option<Encoding> {
    header
        .split(',')
        .find_map(|token| Encoding::from_str(token.trim()).ok())
}
