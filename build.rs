fn main() {
    #[cfg(feature = "swift")]
    {
        println!("cargo:rerun-if-changed=src/bridge.rs");
        swift_bridge_build::parse_bridges(vec!["src/bridge.rs"])
            .write_all_concatenated("./generated", env!("CARGO_PKG_NAME"));
    }
}
