use std::io::Result;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/hrtf.proto");

    // protox parses the schema in-process, so building doesn't depend on a system protoc.
    let descriptors = protox::compile(["src/hrtf.proto"], ["src/"])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    prost_build::Config::new().compile_fds(descriptors)?;
    Ok(())
}
