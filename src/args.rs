use anyhow::Context;
use clap::{Arg, ArgMatches, Command};

fn codec_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("bits")
            .long("bits")
            .default_value("8")
            .value_parser(clap::value_parser!(u32))
            .help("Field word size in bits"),
    )
    .arg(
        Arg::new("primitive")
            .long("primitive")
            .default_value("0x11D")
            .help("Primitive polynomial, hex (0x...) or decimal"),
    )
    .arg(
        Arg::new("degree")
            .long("degree")
            .default_value("10")
            .value_parser(clap::value_parser!(usize))
            .help("Number of ECC bytes (2t, correcting up to t byte errors)"),
    )
}

pub fn parse_args() -> ArgMatches {
    Command::new("rsecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Systematic Reed-Solomon error correction over GF(2^m)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(codec_args(
            Command::new("encode")
                .about("Compute the error-correction code for a message")
                .arg(Arg::new("message").required(true).help("Message bytes as hex")),
        ))
        .subcommand(codec_args(
            Command::new("decode")
                .about("Locate and correct errors in a message + ECC block")
                .arg(Arg::new("message").required(true).help("Message bytes as hex"))
                .arg(Arg::new("ecc").required(true).help("ECC bytes as hex")),
        ))
        .get_matches()
}

/// Parse a primitive polynomial given as `0x11D` or plain decimal
pub fn parse_primitive(text: &str) -> anyhow::Result<u32> {
    let text = text.trim();
    if let Some(hex_digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex_digits, 16)
            .with_context(|| format!("invalid hex polynomial: {}", text))
    } else {
        text.parse()
            .with_context(|| format!("invalid polynomial: {}", text))
    }
}
