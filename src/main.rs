//! # Run-length image tool
#![warn(missing_docs)]

use rle_tool::cli::{
    self,
    decode::process_decode,
    encode::process_encode,
    opt::{Command, Options},
    verify::process_verify,
};

fn main() -> color_eyre::Result<()> {
    let opt: Options = cli::init()?;

    match opt.command {
        Command::Encode(opt) => process_encode(opt),
        Command::Decode(opt) => process_decode(opt),
        Command::Verify(opt) => process_verify(opt),
    }
}
