use std::fs;
use std::process::Command;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_frfold");

const DUMMY_HEX: &str = "deadbeefcafebabe000000000000000000000000000000000000000000000000";
const DUMMY_REDUCED: &str =
    "13876367796315668335904168994681455606263912703330366226354308204443692171264";

fn run(args: &[&str]) -> (i32, String, String) {
    let out = Command::new(BIN).args(args).output().expect("run");
    let code = out.status.code().unwrap_or(-1);
    (
        code,
        String::from_utf8_lossy(&out.stdout).into_owned(),
        String::from_utf8_lossy(&out.stderr).into_owned(),
    )
}

#[test]
fn reduce_dummy_digest() {
    let (code, out, _err) = run(&["reduce", "--digest-hex", DUMMY_HEX]);
    assert_eq!(code, 0, "reduce exit code");
    assert_eq!(out.trim(), DUMMY_REDUCED);

    let (code, out, _err) = run(&["--output", "hex", "reduce", "--digest-hex", DUMMY_HEX]);
    assert_eq!(code, 0);
    assert_eq!(
        out.trim(),
        "0x1eadbeefcafebabe000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn reduce_rejects_oversize_digest() {
    let long = format!("{}00", DUMMY_HEX);
    let (code, _out, err) = run(&["reduce", "--digest-hex", &long]);
    assert_ne!(code, 0, "oversize digest should fail");
    assert!(err.contains("expected 32 bytes"), "stderr: {err}");
}

#[test]
fn hash_abc_with_sha256() {
    let (code, out, _err) = run(&["hash", "--msg", "abc"]);
    assert_eq!(code, 0);
    assert_eq!(
        out.trim(),
        "11972312713768178226791969297712321251811143278991161852801995824771111065005"
    );

    let (code, out_hex, _err) = run(&["hash", "--msg-hex", "616263", "--hash", "sha256"]);
    assert_eq!(code, 0);
    assert_eq!(out, out_hex);
}

#[test]
fn hash_unknown_id_fails() {
    let (code, _out, err) = run(&["hash", "--msg", "abc", "--hash", "md5"]);
    assert_ne!(code, 0);
    assert!(err.contains("md5"), "stderr: {err}");
}

#[test]
fn json_output_from_config_file() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("frfold.toml");
    fs::write(&cfg, "hash = \"sha256\"\noutput = \"json\"\n").unwrap();
    let (code, out, _err) = run(&[
        "--config",
        cfg.to_str().unwrap(),
        "reduce",
        "--digest-hex",
        DUMMY_HEX,
    ]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["value"], DUMMY_REDUCED);
}

#[test]
fn xor_and_pow() {
    let (code, out, _err) = run(&["xor", "--a", "12", "--b", "10"]);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "6");

    let (code, out, _err) = run(&["pow", "--x", "3", "--exp-bits", "1011"]);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "177147");
}

#[test]
fn shape_is_stable() {
    let (code, a, _err) = run(&["shape", "--msg-len", "40"]);
    assert_eq!(code, 0);
    let (_code, b, _err) = run(&["shape", "--msg-len", "40"]);
    assert_eq!(a, b);
    let (_code, c, _err) = run(&["shape", "--msg-len", "41"]);
    assert_ne!(a, c);
}

#[test]
fn pack_then_unpack_restores_bytes() {
    let value = "ab00000000000000000000000000000000000000000000000000000000000102";
    let (code, out, _err) = run(&["pack", "--hex", value]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, ["171", "258"]);

    let (code, out, _err) = run(&["unpack", "--high", lines[0], "--low", lines[1]]);
    assert_eq!(code, 0);
    assert_eq!(out.trim(), format!("0x{value}"));
}

#[test]
fn unpack_rejects_wide_high_byte() {
    let (code, _out, err) = run(&["unpack", "--high", "256", "--low", "0"]);
    assert_ne!(code, 0);
    assert!(err.contains("8 bits"), "stderr: {err}");
}
