use armdec_core::decode::{DecodedInstruction, Decoder};
use armdec_core::isa;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The shared ARM decoder.
pub fn arm() -> &'static Decoder {
    init_tracing();
    isa::arm::decoder().expect("built-in ARM table builds")
}

/// The shared Thumb decoder.
pub fn thumb() -> &'static Decoder {
    init_tracing();
    isa::thumb::decoder().expect("built-in Thumb table builds")
}

/// Decodes `word` and returns the record with its mnemonic.
pub fn decode(decoder: &Decoder, word: u32) -> (String, DecodedInstruction) {
    let insn = decoder
        .decode(word)
        .unwrap_or_else(|e| panic!("{word:#010x} should decode: {e}"));
    (decoder.mnemonic(&insn).to_owned(), insn)
}
