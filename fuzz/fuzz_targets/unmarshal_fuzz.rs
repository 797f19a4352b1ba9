//! Unmarshal fuzz target: decode arbitrary bytes as every struct of the MCD catalogue.
//! Neither the extent walk nor unmarshal may panic, and when both succeed they agree on
//! the number of bytes consumed. Decoded values are marshalled back and freed.
//! Build with: cargo fuzz run unmarshal_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;
#[cfg(fuzzing)]
use mcdgen::{compile, config, message_extent, Codec, CodecOptions};
#[cfg(fuzzing)]
use std::sync::OnceLock;

#[cfg(fuzzing)]
fn codec() -> &'static Codec {
    static CODEC: OnceLock<Codec> = OnceLock::new();
    CODEC.get_or_init(|| {
        let (schema, registry) =
            config::from_toml_str(include_str!("../../schemas/mcd_rpc.toml")).expect("catalogue");
        Codec::new(compile(&schema, &registry).expect("compile"), CodecOptions::default())
    })
}

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let codec = codec();
    for s in codec.compiled().structs() {
        let extent = message_extent(codec.compiled(), &s.name, data);
        match codec.unmarshal(&s.name, data) {
            Ok((mut value, used)) => {
                assert_eq!(extent.ok(), Some(used));
                // Count fields decode independently of the arrays they describe, so
                // re-marshalling may legitimately fail; it must not panic.
                let _ = codec.marshal_to_vec(&s.name, &value);
                codec.free(&s.name, &mut value).expect("free decoded value");
            }
            Err(_) => assert!(extent.is_err()),
        }
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run unmarshal_fuzz");
}
