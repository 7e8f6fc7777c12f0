// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: stamp text into an image spectrum, then render the spectrum.
use std::fs;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: reveal <input image> <text> [font size]");
        eprintln!("       reveal --show <stego.png>");
        std::process::exit(1);
    }

    if args[1] == "--show" {
        let stego = fs::read(&args[2]).expect("Could not read stego image");
        let spectrum = phasm_spectral::get_text_from_image(&stego).expect("Reveal failed");
        let out_path = with_suffix(&args[2], "spectrum");
        fs::write(&out_path, &spectrum).expect("Could not write output");
        println!("Spectrum written to: {out_path}");
        return;
    }

    let font_size = match args.get(3) {
        Some(s) => s.parse().expect("Font size must be a number"),
        None => phasm_spectral::DEFAULT_FONT_SIZE,
    };
    let cover = fs::read(&args[1]).expect("Could not read cover image");

    let stego = phasm_spectral::write_text_into_image(&cover, &args[2], font_size).expect("Embed failed");
    let stego_path = with_suffix(&args[1], "stego");
    fs::write(&stego_path, &stego).expect("Could not write stego image");

    let spectrum = phasm_spectral::get_text_from_image(&stego).expect("Reveal failed");
    let spectrum_path = with_suffix(&args[1], "spectrum");
    fs::write(&spectrum_path, &spectrum).expect("Could not write spectrum image");

    println!("Stego image written to: {stego_path}");
    println!("Spectrum written to: {spectrum_path}");
}

/// `photo.jpg` + `stego` -> `photo_stego.png`
fn with_suffix(path: &str, suffix: &str) -> String {
    let p = Path::new(path);
    let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    p.with_file_name(format!("{stem}_{suffix}.png")).to_string_lossy().into_owned()
}
