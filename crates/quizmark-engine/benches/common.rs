// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_single_questions(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!(
            "(DON)\n(CLO{}) Question number {i} asks something longer than a line\nthat wraps onto a second line.\nA. <u>Correct option {i}</u>\nB. Option two\nC. Option three\nD. Option four\n\n",
            i % 5 + 1
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_question_bank(units: usize, children: usize) -> String {
    let mut content = String::new();

    for unit in 0..units {
        content.push_str(&generate_single_questions(2));

        let (marker, child_marker, end) = if unit % 2 == 0 {
            ("(NHOM)", "NHOM", "(KETTHUCNHOM)")
        } else {
            ("(DIENKHUYET)", "DIENKHUYET", "(KETTHUCDIENKHUYET)")
        };

        content.push_str(&format!("{marker}\n[<sg>]\nRead the passage for unit {unit}. [image: units/{unit}.png]\n"));
        for child in 1..=children {
            content.push_str(&format!("Sentence {{<{child}>}}_____ continues. "));
        }
        content.push_str("\n[<egc>]\n");

        for child in 1..=children {
            if child > 1 {
                content.push_str("[<br>]\n");
            }
            content.push_str(&format!(
                "({child_marker} – {child}) Choose for blank {child} [audio: units/{unit}_{child}.mp3]\nA. <u>right</u>\nB. wrong\nC. also wrong\n"
            ));
        }
        content.push_str(&format!("[</sg>]\n{end}\n\n"));
    }

    content
}
