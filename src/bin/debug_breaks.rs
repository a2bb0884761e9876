use anyhow::Context;
use unibound::bidi::{BidiContext, ParagraphDirection};
use unibound::boundary::BreakIterator;
use unibound::constants::cursor::DONE;
use unibound::locale::Locale;
use unibound::rules;
use unibound::text::Utf16Buffer;

fn print_boundaries(label: &str, iter: &mut BreakIterator) -> anyhow::Result<()> {
    print!("{}:", label);
    let mut offset = iter.first()?;
    while offset != DONE {
        print!(" {}({})", offset, iter.rule_status().tag());
        offset = iter.next()?;
    }
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let text = std::env::args()
        .nth(1)
        .context("usage: debug_breaks <text>")?;

    rules::load()?;
    let buffer = Utf16Buffer::from_utf8(text.as_bytes())?;
    println!("Text: {:?} ({} code units)", text, buffer.len());

    let locale = Locale::root();
    let mut character = BreakIterator::character_instance(&locale)?;
    character.set_text(&buffer)?;
    print_boundaries("Character", &mut character)?;

    let mut line = BreakIterator::line_instance(&locale)?;
    line.set_text(&buffer)?;
    print_boundaries("Line", &mut line)?;

    let mut context = BidiContext::open(buffer.len().max(1), buffer.len().max(1))?;
    context.set_para(&buffer, ParagraphDirection::Auto)?;
    println!("Paragraph level: {}", context.paragraph_level()?);
    println!("Runs: {}", context.count_runs()?);
    let mut position = 0;
    while position < context.length() {
        let run = context.logical_run(position)?;
        println!("  [{}, {}) level {}", run.start, run.limit, run.level);
        position = run.limit;
    }

    Ok(())
}
