//! The document exporter: report sections and the question block layout
//!
//! The report has four ordered sections, each starting on a fresh page:
//! cover, final-exam caption and sampled content, partial-evaluation
//! caption, and the per-unit question sections. Question blocks are
//! measured with a trial render before the page-break decision, then
//! committed twice around an opaque background rectangle so the text
//! stays on top.

use super::canvas::{Canvas, CanvasConfig};
use super::fonts::StandardFont;
use super::renderer::{CircleRenderInfo, PageRenderInfo, RectRenderInfo, RgbColor};
use super::writer::{DocumentInfo, PdfDocumentWriter};
use bank_model::{group_by_category, sample_pool, sample_questions, ExportJob, Question};
use rand::Rng;
use std::io::Write;
use text_clean::normalize;

/// At most this many questions render per unit group; the rest are
/// deliberately omitted.
const UNIT_QUESTION_CAP: usize = 5;

/// Vertical drop before a cover caption
const CAPTION_DROP: f64 = 180.0;

/// Question block paddings and gap
const PAD_LEFT: f64 = 12.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 10.0;
const PAD_BOTTOM: f64 = 12.0;
const BLOCK_GAP: f64 = 10.0;

/// Question and answer typography
const QUESTION_SIZE: f64 = 12.0;
const QUESTION_LINE: f64 = 17.0;
const ANSWER_SIZE: f64 = 10.0;
const ANSWER_LINE: f64 = 14.0;
const ANSWER_INDENT: f64 = 10.0;
const BODY_SIZE: f64 = 11.0;
const BODY_LINE: f64 = 15.0;

/// Banner typography and paddings
const BANNER_SIZE: f64 = 14.0;
const BANNER_LINE: f64 = 18.0;
const BANNER_PAD_X: f64 = 8.0;
const BANNER_PAD_Y: f64 = 4.0;

/// The platform's primary blue (banners)
const BANNER_FILL: RgbColor = RgbColor {
    r: 15.0 / 255.0,
    g: 108.0 / 255.0,
    b: 191.0 / 255.0,
};

/// Light blue painted behind question blocks
const BLOCK_FILL: RgbColor = RgbColor {
    r: 220.0 / 255.0,
    g: 235.0 / 255.0,
    b: 250.0 / 255.0,
};

/// Write the job as a paginated PDF report into `writer`.
///
/// The generator drives the final-exam sample; pass a seeded one for
/// reproducible documents.
pub fn export_pdf<W: Write, R: Rng + ?Sized>(
    job: &ExportJob,
    rng: &mut R,
    writer: W,
) -> crate::Result<()> {
    let strings = job.locale.strings();
    let pages = layout_report(job, rng);

    let info = DocumentInfo {
        title: Some(format!("{} - {}", strings.title, job.course_name)),
        subject: Some(strings.title.to_string()),
        creator: Some("Question Bank Report".to_string()),
        ..Default::default()
    };
    PdfDocumentWriter::new(info).write(&pages, writer)?;
    Ok(())
}

/// Lay out the whole report and return the stamped pages.
pub(crate) fn layout_report<R: Rng + ?Sized>(job: &ExportJob, rng: &mut R) -> Vec<PageRenderInfo> {
    let mut canvas = Canvas::new(CanvasConfig::a4());

    cover(&mut canvas, job);
    final_exam_section(&mut canvas, job, rng);
    partial_evaluation_cover(&mut canvas, job);
    unit_sections(&mut canvas, job);

    canvas.finish(job.locale.strings().page_word)
}

/// Section 1: centered report title and course name.
fn cover(canvas: &mut Canvas, job: &ExportJob) {
    let strings = job.locale.strings();
    canvas.add_page();
    canvas.advance(CAPTION_DROP);
    canvas.draw_centered(
        strings.title,
        StandardFont::HelveticaBold,
        32.0,
        40.0,
        RgbColor::black(),
    );
    canvas.advance(10.0);
    canvas.draw_centered(
        &normalize(&job.course_name),
        StandardFont::Helvetica,
        18.0,
        24.0,
        RgbColor::black(),
    );
}

/// Section 2: caption page, then the description and the sampled
/// questions (or the no-questions notice).
fn final_exam_section<R: Rng + ?Sized>(canvas: &mut Canvas, job: &ExportJob, rng: &mut R) {
    let strings = job.locale.strings();

    canvas.add_page();
    canvas.advance(CAPTION_DROP);
    canvas.draw_centered(
        strings.final_exam_caption,
        StandardFont::HelveticaBold,
        20.0,
        26.0,
        RgbColor::black(),
    );

    canvas.add_page();
    let margin_left = canvas.config().margin_left;
    let content_width = canvas.content_width();
    canvas.draw_wrapped(
        strings.final_exam_description,
        StandardFont::Helvetica,
        BODY_SIZE,
        margin_left,
        content_width,
        BODY_LINE,
        RgbColor::black(),
    );
    canvas.advance(10.0);

    let pool = sample_pool(&job.questions, job.final_exam_category);
    if pool.is_empty() {
        canvas.draw_wrapped(
            strings.no_questions_notice,
            StandardFont::Helvetica,
            BODY_SIZE,
            margin_left,
            content_width,
            BODY_LINE,
            RgbColor::black(),
        );
        canvas.advance(10.0);
        return;
    }

    let sample = sample_questions(&pool, rng);
    draw_banner(canvas, &job.locale.sample_banner(sample.len()));
    for question in sample {
        question_block(canvas, job, question);
    }
}

/// Section 3: caption page only.
fn partial_evaluation_cover(canvas: &mut Canvas, job: &ExportJob) {
    canvas.add_page();
    canvas.advance(CAPTION_DROP);
    canvas.draw_centered(
        job.locale.strings().partial_caption,
        StandardFont::HelveticaBold,
        20.0,
        26.0,
        RgbColor::black(),
    );
}

/// Section 4: one unit per category, numbered in first-seen order, at
/// most five questions each.
fn unit_sections(canvas: &mut Canvas, job: &ExportJob) {
    let groups = group_by_category(&job.questions, job.final_exam_category);
    for (index, group) in groups.iter().enumerate() {
        canvas.add_page();
        draw_banner(
            canvas,
            &job.locale.unit_banner(index + 1, &normalize(group.category)),
        );
        for &question in group.questions.iter().take(UNIT_QUESTION_CAP) {
            question_block(canvas, job, question);
        }
    }
}

/// Full-width blue banner with wrapped white bold text.
fn draw_banner(canvas: &mut Canvas, text: &str) {
    let margin_left = canvas.config().margin_left;
    let width = canvas.content_width();
    let text_width = width - 2.0 * BANNER_PAD_X;

    let lines = Canvas::wrap_text(text, StandardFont::HelveticaBold, BANNER_SIZE, text_width);
    let height = lines.len().max(1) as f64 * BANNER_LINE + 2.0 * BANNER_PAD_Y;

    let top = canvas.cursor();
    canvas.draw_rect(RectRenderInfo {
        x: margin_left,
        y: top,
        width,
        height,
        fill: Some(BANNER_FILL),
        stroke: None,
        stroke_width: 0.0,
    });

    canvas.set_cursor(top + BANNER_PAD_Y);
    canvas.draw_wrapped(
        text,
        StandardFont::HelveticaBold,
        BANNER_SIZE,
        margin_left + BANNER_PAD_X,
        text_width,
        BANNER_LINE,
        RgbColor::white(),
    );
    canvas.set_cursor(top + height);
    canvas.advance(10.0);
}

/// One framed question block, following the measure/commit protocol:
///
/// 1. trial-render to learn the end cursor and page,
/// 2. roll back,
/// 3. break to a fresh page when the trial crossed one or the needed
///    height exceeds the remaining space (at most once, no retry),
/// 4. commit-render, paint the background rectangle over it, and render
///    the text a second time on top.
fn question_block(canvas: &mut Canvas, job: &ExportJob, question: &Question) {
    let margin_left = canvas.config().margin_left;
    let start = canvas.cursor();
    let start_page = canvas.page_index();

    canvas.begin_trial();
    render_block_text(canvas, job, question, false);
    let trial_end = canvas.cursor();
    let trial_page = canvas.page_index();
    canvas.rollback_trial();

    let needed = (trial_end - start) + PAD_BOTTOM;
    if trial_page != start_page || needed > canvas.remaining_space() {
        canvas.add_page();
    }

    let block_top = canvas.cursor();
    let block_page = canvas.page_index();
    render_block_text(canvas, job, question, true);
    let end = canvas.cursor();
    let height = (end - block_top) + PAD_BOTTOM;

    if canvas.page_index() != block_page {
        // Taller than a full page even from a fresh top: leave the single
        // render unframed rather than paint a background across pages.
        tracing::warn!(
            question_id = question.id,
            "question block exceeds a full page, skipping background"
        );
        canvas.advance(PAD_BOTTOM + BLOCK_GAP);
        return;
    }

    canvas.draw_rect(RectRenderInfo {
        x: margin_left,
        y: block_top,
        width: canvas.content_width(),
        height,
        fill: Some(BLOCK_FILL),
        stroke: None,
        stroke_width: 0.0,
    });

    canvas.set_cursor(block_top);
    render_block_text(canvas, job, question, true);

    canvas.set_cursor(block_top + height);
    canvas.advance(BLOCK_GAP);
}

/// The block's text content: bold question text, then one wrapped line
/// per answer with a circle marker and the correctness suffix. The trial
/// pass skips the markers, matching what the measurement needs.
fn render_block_text(canvas: &mut Canvas, job: &ExportJob, question: &Question, commit: bool) {
    let margin_left = canvas.config().margin_left;
    let x = margin_left + PAD_LEFT;
    let text_width = canvas.content_width() - PAD_LEFT - PAD_RIGHT;

    canvas.advance(PAD_TOP);
    canvas.draw_wrapped(
        &normalize(&question.text),
        StandardFont::HelveticaBold,
        QUESTION_SIZE,
        x,
        text_width,
        QUESTION_LINE,
        RgbColor::black(),
    );
    canvas.advance(8.0);

    for answer in job.answers_for(question.id) {
        let marker = if answer.is_correct() {
            job.locale.strings().correct_marker
        } else {
            ""
        };
        let line = format!("{}{}", normalize(&answer.text), marker);

        if commit {
            canvas.draw_circle(CircleRenderInfo {
                cx: x + 3.0,
                cy: canvas.cursor() + ANSWER_LINE / 2.0,
                radius: 1.8,
                color: RgbColor::black(),
                width: 0.5,
            });
        }
        canvas.draw_wrapped(
            &line,
            StandardFont::Helvetica,
            ANSWER_SIZE,
            x + ANSWER_INDENT,
            text_width - ANSWER_INDENT,
            ANSWER_LINE,
            RgbColor::black(),
        );
    }
}
