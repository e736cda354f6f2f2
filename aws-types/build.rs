/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn generate_build_vars(output_path: &Path) {
    let rust_version = rustc_version::version().expect("Could not retrieve rustc version");
    let mut f =
        File::create(&output_path.join("build_env.rs")).expect("Could not create build environment");
    f.write_all(format!("const RUST_VERSION: &str = \"{}\";", rust_version).as_bytes())
        .expect("Unable to write rust version");
    f.flush().expect("failed to flush");
}

fn main() {
    // This is the recommended way to get OUT_DIR
    // https://doc.rust-lang.org/cargo/reference/build-scripts.html#outputs-of-the-build-script
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is always set for build scripts");
    let dest_path = Path::new(&out_dir);
    generate_build_vars(dest_path);
}
