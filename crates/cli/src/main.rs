use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use frfold_corelib as core;
use num_bigint::BigUint;
use serde::Serialize;

use frfold_corelib::config::{Config, OutputFormat};
use frfold_corelib::constants::{CLAMP_MASK, C254, C255, MODULUS};
use frfold_corelib::field::CanonicalElement;
use frfold_corelib::gadgets::field_ops;
use frfold_corelib::pack::Bytes32FieldPair;
use frfold_corelib::Circuit;

#[derive(Parser)]
#[command(name = "frfold", version, about = "Fold digests into BN254 scalars")]
struct Cli {
    /// Config file (default: ./frfold.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format override: decimal, hex or json
    #[arg(long, global = true)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clamp and reduce a 32-byte digest
    Reduce {
        #[arg(long)]
        digest_hex: String,
        /// Skip the clamp and reduce the full 256-bit value
        #[arg(long)]
        unmasked: bool,
    },
    /// Hash a message, then clamp and reduce the digest
    Hash {
        /// Digest id (overrides config): sha256, keccak256, blake3
        #[arg(long)]
        hash: Option<String>,
        #[arg(long, conflicts_with = "msg")]
        msg_hex: Option<String>,
        #[arg(long)]
        msg: Option<String>,
    },
    /// Limb-wise XOR of two canonical elements (decimal)
    Xor {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Raise a canonical element (decimal) to a fixed exponent given in bits
    Pow {
        #[arg(long)]
        x: String,
        #[arg(long)]
        exp_bits: String,
    },
    /// Split a 32-byte value into its high-byte / lower-bytes field pair
    Pack {
        #[arg(long = "hex")]
        value_hex: String,
    },
    /// Join a high byte and the lower 31 bytes (both decimal) back into 32 bytes
    Unpack {
        #[arg(long)]
        high: String,
        #[arg(long)]
        low: String,
    },
    /// Print the field modulus and correction constants
    Constants,
    /// Print the gate count and shape fingerprint of a pipeline
    Shape {
        /// Message length for the hash pipeline; omit for the digest pipeline
        #[arg(long)]
        msg_len: Option<usize>,
    },
}

#[derive(Serialize)]
struct ValueOut {
    value: String,
    hex: String,
}

fn to_hex(x: &CanonicalElement) -> String {
    format!("0x{}", hex::encode(x.to_bytes_be()))
}

fn print_value(x: &CanonicalElement, fmt: OutputFormat) -> Result<()> {
    match fmt {
        OutputFormat::Decimal => println!("{}", x),
        OutputFormat::Hex => println!("{}", to_hex(x)),
        OutputFormat::Json => {
            let out = ValueOut {
                value: x.to_string(),
                hex: to_hex(x),
            };
            println!("{}", serde_json::to_string(&out)?);
        }
    }
    Ok(())
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).with_context(|| format!("decoding hex '{}'", s))
}

fn parse_element(s: &str) -> Result<CanonicalElement> {
    let v = BigUint::parse_bytes(s.trim().as_bytes(), 10)
        .ok_or_else(|| anyhow!("'{}' is not a decimal integer", s))?;
    Ok(CanonicalElement::constant(&v)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut cfg = Config::load_or_default(cli.config.as_deref())?;
    if let Some(fmt) = cli.output {
        cfg.output = fmt;
    }
    log::debug!("config: {:?}", cfg);

    match cli.command {
        Some(Commands::Reduce {
            digest_hex,
            unmasked,
        }) => {
            let digest = decode_hex(&digest_hex)?;
            let mut cs = Circuit::new();
            let x = if unmasked {
                core::reduce_unmasked(&mut cs, &digest)?
            } else {
                core::reduce_digest(&mut cs, &digest)?
            };
            log::info!("reduced with {} gates", cs.gate_count());
            print_value(&x, cfg.output)?;
        }
        Some(Commands::Hash { hash, msg_hex, msg }) => {
            let hash_id = hash.unwrap_or(cfg.hash.clone());
            let message = match (msg_hex, msg) {
                (Some(h), _) => decode_hex(&h)?,
                (None, Some(m)) => m.into_bytes(),
                (None, None) => return Err(anyhow!("one of --msg-hex or --msg is required")),
            };
            let mut cs = Circuit::new();
            let x = core::hash_then_reduce_by_id(&mut cs, &hash_id, &message)?;
            log::info!(
                "hash '{}' over {} bytes, {} gates",
                hash_id,
                message.len(),
                cs.gate_count()
            );
            print_value(&x, cfg.output)?;
        }
        Some(Commands::Xor { a, b }) => {
            let a = parse_element(&a)?;
            let b = parse_element(&b)?;
            let x = field_ops::xor(&mut Circuit::new(), &a, &b)?;
            print_value(&x, cfg.output)?;
        }
        Some(Commands::Pow { x, exp_bits }) => {
            let x = parse_element(&x)?;
            let bits = field_ops::parse_exponent_bits(&exp_bits)?;
            let y = field_ops::pow(&mut Circuit::new(), &x, &bits)?;
            print_value(&y, cfg.output)?;
        }
        Some(Commands::Pack { value_hex }) => {
            let raw = decode_hex(&value_hex)?;
            let bytes: [u8; 32] = raw
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("expected 32 bytes, got {}", raw.len()))?;
            let pair = Bytes32FieldPair::from_bytes32(&bytes)?;
            print_value(pair.high_byte(), cfg.output)?;
            print_value(pair.lower_bytes(), cfg.output)?;
        }
        Some(Commands::Unpack { high, low }) => {
            let pair = Bytes32FieldPair::from_parts(parse_element(&high)?, parse_element(&low)?)?;
            println!("0x{}", hex::encode(pair.to_bytes32()));
        }
        Some(Commands::Constants) => {
            println!("r      = {}", *MODULUS);
            println!("c254   = {}", *C254);
            println!("c255   = {}", *C255);
            println!("mask   = {}", hex::encode(CLAMP_MASK));
        }
        Some(Commands::Shape { msg_len }) => {
            let mut cs = Circuit::new();
            match msg_len {
                Some(n) => {
                    core::hash_then_reduce_by_id(&mut cs, &cfg.hash, &vec![0u8; n])?;
                }
                None => {
                    core::reduce_digest(&mut cs, &core::DUMMY_DIGEST)?;
                }
            }
            println!("gates  = {}", cs.gate_count());
            println!("shape  = {}", hex::encode(cs.shape_digest()));
        }
        None => {
            println!("frfold {} — ready", core::version());
            println!("Try: `frfold reduce --digest-hex <64 hex>` or `frfold constants`");
        }
    }
    Ok(())
}
