use std::panic;

use jotmark_core::{Options, parse, to_html};

const CASES: usize = 200;
const MAX_LEN: usize = 512;
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \
\n\t#@*`[](){}!>:+-_~=./\\\\\"";
const WORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[test]
fn parser_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x7f4a_2d91_13b4_55a1);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let result = panic::catch_unwind(|| to_html(&source));
        if result.is_err() {
            return Err(format!("parse panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn formatting_tags_are_balanced() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x91d4_2f8e_c1a3_044f);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let html = to_html(&source);
        for (open, close) in [("<em>", "</em>"), ("<strong>", "</strong>"), ("<s>", "</s>")] {
            let opened = html.matches(open).count();
            let closed = html.matches(close).count();
            if opened != closed {
                return Err(format!(
                    "case {}: {} opened {} times, closed {} times\nSource:\n---\n{}\n---\nHTML:\n{}",
                    case, open, opened, closed, source, html
                )
                .into());
            }
        }
    }
    Ok(())
}

#[test]
fn plain_words_pass_through() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x0c3e_77d1_5a20_9b6f);
    for case in 0..CASES {
        let words = rng.gen_range(1, 40);
        let source = (0..words)
            .map(|_| {
                let len = rng.gen_range(1, 12);
                random_string(&mut rng, WORD_CHARS, len)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let html = to_html(&source);
        if html != source.trim() {
            return Err(format!("case {}: {:?} rendered as {:?}", case, source, html).into());
        }
        if to_html(&html) != html {
            return Err(format!("case {}: second pass changed {:?}", case, html).into());
        }
    }
    Ok(())
}

#[test]
fn deep_nesting_is_bounded() {
    let source = "> ".repeat(200) + "deep";
    let options = Options {
        max_depth: 8,
        ..Default::default()
    };
    let html = parse(&source, None, Some(&options));
    assert_eq!(html.matches("<blockquote>").count(), 8);
    assert!(html.ends_with(&format!("deep{}", "</blockquote>".repeat(8))));
}

fn random_string(rng: &mut Lcg, charset: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, charset.len());
        let byte = charset.get(idx).copied().unwrap_or(b' ');
        out.push(byte as char);
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}
