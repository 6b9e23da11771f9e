//! # Terminal Presenter
//!
//! Lays a [`View`] out as plain text, top to bottom.

use qualcode_core::{
    Glyphs,
    view::{Labelled, Section, StageCard, View, Walkthrough},
};
use std::fmt::Write;

const RULE_WIDTH: usize = 72;

/// Draw the whole view.
pub fn present(view: &View, glyphs: &dyn Glyphs) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "[{}] {} ---- {} [{}]",
        view.legend.concrete_tone.name(),
        view.legend.concrete_label,
        view.legend.abstract_label,
        view.legend.abstract_tone.name()
    );
    let _ = writeln!(out);

    for card in &view.stages {
        present_stage(&mut out, card, glyphs);
    }
    let _ = writeln!(out);

    present_walkthrough(&mut out, &view.walkthrough, glyphs);

    let _ = writeln!(out, "{}", view.principles_heading);
    let _ = writeln!(out, "{}", "=".repeat(view.principles_heading.len()));
    for principle in &view.principles {
        let _ = writeln!(out, "{}", principle.title);
        let _ = writeln!(out, "  {}", principle.body);
    }

    out
}

/// Draw one stage card: the header line, then the detail if expanded.
pub fn present_stage(out: &mut String, card: &StageCard, glyphs: &dyn Glyphs) {
    let _ = writeln!(
        out,
        "{} ({}) {}  {}  [{}]",
        glyphs.glyph(card.icon),
        card.id,
        card.name,
        card.level,
        card.accent.css()
    );

    let Some(detail) = &card.detail else {
        return;
    };

    labelled_text(out, &detail.description, glyphs);
    let _ = writeln!(
        out,
        "    {} {}",
        glyphs.glyph(detail.questions.icon),
        detail.questions.label
    );
    for question in &detail.questions.content {
        let _ = writeln!(out, "      - {question}");
    }
    labelled_text(out, &detail.work, glyphs);
    labelled_text(out, &detail.pitfall, glyphs);
}

fn labelled_text(out: &mut String, block: &Labelled<String>, glyphs: &dyn Glyphs) {
    let _ = writeln!(out, "    {} {}", glyphs.glyph(block.icon), block.label);
    let _ = writeln!(out, "      {}", block.content);
}

fn section_heading<T>(out: &mut String, section: &Section<T>) {
    let _ = writeln!(out, "{} ({})", section.heading, section.tone.name());
}

fn section_notice<T>(out: &mut String, section: &Section<T>) {
    if let Some(notice) = section.notice {
        let _ = writeln!(out, "  -> {notice}");
    }
    let _ = writeln!(out);
}

fn present_walkthrough(out: &mut String, w: &Walkthrough, glyphs: &dyn Glyphs) {
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{} {} [{}]",
        glyphs.glyph(w.icon),
        w.heading,
        w.example
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    section_heading(out, &w.raw);
    let _ = writeln!(out, "  \"{}\"", w.raw.body);
    section_notice(out, &w.raw);

    section_heading(out, &w.codes);
    for row in &w.codes.body {
        let _ = writeln!(out, "  {}  \"{}\"", row.code, row.segment);
    }
    section_notice(out, &w.codes);

    section_heading(out, &w.categories);
    for group in &w.categories.body {
        let codes: Vec<&str> = group.codes.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(out, "  {}", group.name);
        let _ = writeln!(out, "    [{}]", codes.join("] ["));
    }
    section_notice(out, &w.categories);

    section_heading(out, &w.themes);
    for theme in &w.themes.body {
        let _ = writeln!(out, "  {}", theme.name);
        let _ = writeln!(out, "    Connects: {}", theme.connects_label);
        let _ = writeln!(out, "    -> {}", theme.insight);
    }
    section_notice(out, &w.themes);

    section_heading(out, &w.theory);
    let _ = writeln!(out, "  {}", w.theory.body);
    section_notice(out, &w.theory);
}
