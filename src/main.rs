use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;

use rsecc::{GaloisField, RsCodec};

fn main() -> Result<()> {
    env_logger::init();

    let matches = rsecc::parse_args();
    match matches.subcommand() {
        Some(("encode", sub)) => run_encode(sub),
        Some(("decode", sub)) => run_decode(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn build_codec(sub: &ArgMatches) -> Result<RsCodec> {
    let bits = *sub.get_one::<u32>("bits").expect("defaulted");
    let primitive = rsecc::parse_primitive(sub.get_one::<String>("primitive").expect("defaulted"))?;
    let degree = *sub.get_one::<usize>("degree").expect("defaulted");

    let field = Arc::new(GaloisField::new(bits, primitive)?);
    Ok(RsCodec::new(field, degree)?)
}

fn hex_arg(sub: &ArgMatches, name: &str) -> Result<Vec<u8>> {
    let text = sub.get_one::<String>(name).expect("required");
    hex::decode(text).with_context(|| format!("{} must be a hex byte string", name))
}

fn run_encode(sub: &ArgMatches) -> Result<()> {
    let codec = build_codec(sub)?;
    let message = hex_arg(sub, "message")?;

    let ecc = codec.compute_ecc(&message)?;
    println!("{}", hex::encode(ecc));
    Ok(())
}

fn run_decode(sub: &ArgMatches) -> Result<()> {
    let codec = build_codec(sub)?;
    let mut message = hex_arg(sub, "message")?;
    let ecc = hex_arg(sub, "ecc")?;

    let corrected = codec.decode(&mut message, &ecc)?;
    println!("{}", hex::encode(&message));
    if corrected.is_empty() {
        eprintln!("no errors detected");
    } else {
        eprintln!("corrected {} byte(s) at offsets {:?}", corrected.len(), corrected);
    }
    Ok(())
}
