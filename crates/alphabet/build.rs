use std::{fs, path::PathBuf};

const HEIGHT: usize = 7;

#[derive(Debug, Clone)]
struct Glyph {
    patterns: Vec<String>,
    width: usize,
    bits: Vec<u8>,
}

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(glyphs: &[Glyph]) -> String {
    let mut out = String::new();

    out.push_str("/// Height, in pixels, of every glyph in the built-in alphabet.\n");
    out.push_str(&format!("pub const HEIGHT: usize = {};\n\n", HEIGHT));

    out.push_str(&format!(
        "static ALPHABET: [GlyphData; {}] = [\n",
        glyphs.len()
    ));

    for glyph in glyphs {
        out.push_str("    GlyphData {\n");
        out.push_str(&format!("        patterns: &{:?},\n", glyph.patterns));
        out.push_str(&format!("        width: {},\n", glyph.width));
        out.push_str("        bits: &[");

        for (i, bit) in glyph.bits.iter().enumerate() {
            if i % glyph.width == 0 {
                out.push_str("\n            ");
            }
            out.push_str(&format!("{}, ", bit));
        }

        out.push_str("\n        ],\n    },\n");
    }

    out.push_str("];\n");

    out
}

/// Parse the pattern line of a glyph block (without the leading ':').
fn parse_patterns(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(|pattern| pattern.replace("\\s", " "))
        .collect()
}

/// Turn a finished block of rows into a glyph.
fn finish(current: Option<(Vec<String>, Vec<&str>)>, glyphs: &mut Vec<Glyph>) {
    if let Some((patterns, rows)) = current {
        assert_eq!(
            rows.len(),
            HEIGHT,
            "glyph {:?} must be {} rows tall",
            patterns,
            HEIGHT
        );
        let width = rows[0].len();
        let mut bits = Vec::with_capacity(width * HEIGHT);

        for row in rows {
            assert_eq!(row.len(), width, "ragged row in glyph {:?}", patterns);
            bits.extend(row.chars().map(|c| match c {
                '#' => 1,
                '.' => 0,
                other => panic!("unexpected pixel {:?} in glyph {:?}", other, patterns),
            }));
        }

        glyphs.push(Glyph {
            patterns,
            width,
            bits,
        });
    }
}

/// Load the glyph blocks of an alphabet file.
fn load_file(file: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut current: Option<(Vec<String>, Vec<&str>)> = None;

    for line in file.lines() {
        let line = line.trim_end();

        if line.is_empty() || line.starts_with('#') && current.is_none() {
            continue;
        }

        if let Some(patterns) = line.strip_prefix(':') {
            finish(current.take(), &mut glyphs);
            current = Some((parse_patterns(patterns), Vec::new()));
        } else if let Some((_, rows)) = current.as_mut() {
            rows.push(line);
        }
    }

    finish(current.take(), &mut glyphs);

    glyphs
}

fn main() {
    let alphabet = fs::read_to_string("data/alphabet.txt").unwrap();

    let glyphs = load_file(&alphabet);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("alphabet.rs");

    fs::write(out_file, generate_rust(&glyphs)).unwrap();

    println!("cargo:rerun-if-changed=data/alphabet.txt");
}
