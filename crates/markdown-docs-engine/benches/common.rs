// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section with **bold**\n\nParagraph with _some_ content and a [link](http://example.com).\n\n- Bullet point\n  - Nested item\n- **Another item**\n\n> Quoted ~~text~~\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// One long paragraph carrying `markers` bold spans, the worst case for the
/// re-search loop.
#[allow(dead_code)]
pub fn generate_marker_heavy_line(markers: usize) -> String {
    let mut line = String::new();
    for i in 0..markers {
        line.push_str(&format!("word{i} **bold{i}** and _it{i}_ "));
    }
    line
}
