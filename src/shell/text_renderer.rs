// Plain text renderer for the page views, used by the binary.
//
// Purpose
// - Draw each view model as lines of text. Pure: views in, strings out.

use crate::application::pages::admin::{AdminSection, AdminView, NoticeKind};
use crate::application::pages::explore::{ExploreView, Section};
use crate::application::pages::swipe::{SwipeBody, SwipeView, Toast};
use crate::core::projector::card::SpotCard;
use std::fmt::Write;

pub fn render_explore(view: &ExploreView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Explore [{}] ==", view.filter);
    let _ = writeln!(out, "-- Pilihan terbaik --");
    render_section(&mut out, &view.featured);
    let _ = writeln!(out, "-- Semua spot --");
    let _ = writeln!(out, "{}", view.count_text);
    render_section(&mut out, &view.list);
    if let Some(detail) = &view.detail {
        let _ = writeln!(out, "-- Detail: {} --", detail.card.name);
        let _ = writeln!(
            out,
            "   [{}] {} | {}",
            detail.card.category_icon, detail.card.category_label, detail.distance_from_campus
        );
        let _ = writeln!(out, "   Lokasi: {}", detail.location);
        if !detail.card.short_description.is_empty() {
            let _ = writeln!(out, "   {}", detail.card.short_description);
        }
        if !detail.full_description.is_empty() {
            let _ = writeln!(out, "   {}", detail.full_description);
        }
    }
    out
}

fn render_section(out: &mut String, section: &Section) {
    match section {
        Section::Placeholder(text) => {
            let _ = writeln!(out, "   {text}");
        }
        Section::Cards(cards) => {
            for card in cards {
                render_card_line(out, card);
            }
        }
    }
}

fn render_card_line(out: &mut String, card: &SpotCard) {
    let star = if card.is_featured { " *" } else { "" };
    let _ = writeln!(
        out,
        " - {}{} [{}] {} | {}",
        card.name, star, card.category_icon, card.category_label, card.distance
    );
}

pub fn render_swipe(view: &SwipeView, toast: Option<&Toast>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Swipe [{}] {} ==", view.filter, view.indicator);
    match &view.body {
        SwipeBody::Card(card) => {
            render_card_line(&mut out, card);
            if !card.short_description.is_empty() {
                let _ = writeln!(out, "   {}", card.short_description);
            }
            if !card.location_text.is_empty() {
                let _ = writeln!(out, "   {}", card.location_text);
            }
        }
        body => {
            let _ = writeln!(out, "   {}", body.message().unwrap_or_default());
        }
    }
    let controls = if view.controls_enabled { "aktif" } else { "nonaktif" };
    let _ = writeln!(out, "   {} | tombol {}", view.stats_text, controls);
    if let Some(toast) = toast {
        let _ = writeln!(out, "   ({}) {}", toast.icon, toast.message);
    }
    out
}

pub fn render_admin(view: &AdminView) -> String {
    let mut out = String::new();
    match view.section {
        AdminSection::Login => {
            let _ = writeln!(out, "== Admin: login ==");
            if let Some(error) = &view.login_error {
                let _ = writeln!(out, "   {error}");
            }
        }
        AdminSection::Admin => {
            let _ = writeln!(out, "== Admin: {} ==", view.admin_email);
            let _ = writeln!(out, "{}", view.count_text);
            match view.empty_table {
                Some(text) => {
                    let _ = writeln!(out, "   {text}");
                }
                None => {
                    for row in &view.rows {
                        let _ = writeln!(
                            out,
                            " - {} | {} | {} | {} | {}",
                            row.id, row.name, row.category_label, row.distance, row.featured
                        );
                    }
                }
            }
            let _ = writeln!(
                out,
                "   {} [{}]",
                view.form_mode.label(),
                if view.submit_enabled { view.form_mode.submit_label() } else { "-" }
            );
        }
    }
    if let Some(notice) = &view.notice {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        let _ = writeln!(out, "   [{tag}] {}", notice.text);
    }
    out
}

#[cfg(test)]
mod text_renderer_tests {
    use super::*;
    use crate::application::pages::admin::FormMode;
    use crate::core::projector::filter::CategoryFilter;
    use crate::core::spot::draft::SpotForm;
    use crate::core::swipe::SwipeAction;
    use rstest::rstest;

    #[rstest]
    fn it_should_render_the_swipe_placeholder_and_toast() {
        let view = SwipeView {
            filter: CategoryFilter::All,
            body: SwipeBody::Exhausted,
            indicator: "Spot 2 dari 2".to_string(),
            stats_text: "1 suka • 0 disimpan".to_string(),
            controls_enabled: false,
        };
        let text = render_swipe(&view, Some(&Toast::for_action(SwipeAction::Skip)));
        assert!(text.contains("== Swipe [All] Spot 2 dari 2 =="));
        assert!(text.contains("Kamu sudah melihat semua spot untuk kategori ini"));
        assert!(text.contains("tombol nonaktif"));
        assert!(text.contains("Spot dilewati"));
    }

    #[rstest]
    fn it_should_render_the_login_error() {
        let view = AdminView {
            section: AdminSection::Login,
            admin_email: String::new(),
            notice: None,
            login_error: Some("Gagal login: auth/invalid-credential".to_string()),
            count_text: "0 spot terdaftar.".to_string(),
            rows: vec![],
            empty_table: None,
            form: SpotForm::default(),
            form_mode: FormMode::Create,
            submit_enabled: false,
        };
        let text = render_admin(&view);
        assert!(text.starts_with("== Admin: login =="));
        assert!(text.contains("Gagal login: auth/invalid-credential"));
    }
}
