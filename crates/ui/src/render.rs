//! HTML rendering of the UI state. All text is escaped.

use media_tracker_core::{ListKind, usable_poster_url};

use crate::{App, Card, CardMode, Filters, ListSource, ListView, RatingControl, ResultCard, SearchForm, TYPE_OPTIONS};

const STYLE: &str = "body{font-family:sans-serif;background:#14161a;color:#e6e6e6;margin:0 auto;max-width:1100px;padding:1rem}\
.media-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1rem}\
.media-card{background:#1f232a;border-radius:8px;overflow:hidden}\
.card-poster img,.poster-placeholder{width:100%;height:280px;object-fit:cover;display:flex;align-items:center;justify-content:center;background:#2a2f38}\
.card-content{padding:.75rem}.card-type{font-size:.8rem;text-transform:uppercase;opacity:.7}\
.star{color:#555}.star.filled{color:#f5c518}.error-message,.notice{color:#ff8080}\
.list-header{display:flex;justify-content:space-between;align-items:baseline}";

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Poster image, or a placeholder when the URL is missing, blank or `"N/A"`.
#[must_use]
pub fn poster(url: Option<&str>, title: &str) -> String {
    match usable_poster_url(url) {
        Some(url) => format!(
            r#"<div class="card-poster"><img src="{}" alt="{}"></div>"#,
            escape(url),
            escape(title)
        ),
        None => r#"<div class="card-poster"><div class="poster-placeholder"><span>No Image</span></div></div>"#
            .to_owned(),
    }
}

#[must_use]
pub fn rating(control: &RatingControl) -> String {
    let mut html = String::from(r#"<div class="rating-container">"#);
    for (star, filled) in control.stars() {
        let class = match (filled, control.editable()) {
            (true, true) => "star filled editable",
            (true, false) => "star filled",
            (false, true) => "star editable",
            (false, false) => "star",
        };
        let role = if control.editable() { r#" role="button" tabindex="0""# } else { "" };
        html.push_str(&format!(r#"<span class="{class}" data-star="{star}"{role}>★</span>"#));
    }
    if let Some(label) = control.label() {
        html.push_str(&format!(r#"<span class="rating-text">{label}</span>"#));
    }
    html.push_str("</div>");
    html
}

/// Star picker posted as the `rating` form field; the current rating is checked.
#[must_use]
pub fn rating_input(control: &RatingControl) -> String {
    let mut html = String::from(r#"<fieldset class="rating-container rating-input">"#);
    for (star, filled) in control.stars() {
        let class = if filled { "star filled editable" } else { "star editable" };
        let checked = if star == control.rating() { " checked" } else { "" };
        html.push_str(&format!(
            r#"<label class="{class}"><input type="radio" name="rating" value="{star}"{checked}>★</label>"#
        ));
    }
    html.push_str("</fieldset>");
    html
}

fn heading(title: &str, year: Option<&str>, media_type: Option<&str>) -> String {
    let mut html = format!(
        r#"<h3 class="card-title">{}</h3><p class="card-year">{}</p>"#,
        escape(title),
        escape(year.unwrap_or_default())
    );
    if let Some(t) = media_type.filter(|t| !t.is_empty()) {
        html.push_str(&format!(r#"<span class="card-type">{}</span>"#, escape(t)));
    }
    html
}

fn notice(text: Option<&str>) -> String {
    text.map(|n| format!(r#"<p class="notice">{}</p>"#, escape(n))).unwrap_or_default()
}

/// A saved entry. Untitled and removed entries render as nothing.
///
/// Viewing cards link to their edit mode and post removals; editing cards are
/// a form posting the drafts back.
#[must_use]
pub fn saved_card(card: &Card) -> String {
    if !card.is_renderable() || card.mode() == CardMode::Removed {
        return String::new();
    }
    let entry = card.entry();
    let kind = card.kind();
    let rules = kind.rules();
    let mut html = format!(
        r#"<div class="media-card saved-card" data-id="{}">{}<div class="card-content">{}"#,
        entry.id,
        poster(entry.poster_url.as_deref(), &entry.title),
        heading(&entry.title, entry.year.as_deref(), entry.media_type.as_deref())
    );
    match card.mode() {
        CardMode::Editing => {
            html.push_str(&format!(r#"<form class="edit-form" method="post" action="/view/{kind}/{}">"#, entry.id));
            if rules.rating_mutable {
                html.push_str(&rating_input(&card.rating_control()));
            }
            html.push_str(&format!(
                r#"<div class="form-group"><label>Your Thoughts</label><textarea name="notes" class="notes-textarea" rows="4" placeholder="What did you think of this?">{}</textarea></div>"#,
                escape(card.draft_notes())
            ));
            html.push_str(&format!(
                r#"<div class="card-actions"><button type="submit" class="btn btn-primary">Save</button><a class="btn btn-secondary" href="/?list={kind}">Cancel</a></div></form>"#
            ));
        },
        CardMode::Viewing | CardMode::Removed => {
            if rules.rating_mutable {
                html.push_str(&rating(&card.rating_control()));
            }
            if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
                html.push_str(&format!(
                    r#"<div class="notes-display"><p class="notes-label">Your Notes:</p><p class="notes-text">{}</p></div>"#,
                    escape(notes)
                ));
            }
            html.push_str(&format!(
                r#"<div class="card-actions"><a class="btn btn-secondary" href="/?list={kind}&amp;edit={id}">Edit</a><form method="post" action="/view/{kind}/{id}/delete"><button type="submit" class="btn btn-danger">Remove</button></form></div>"#,
                id = entry.id
            ));
        },
    }
    html.push_str(&notice(card.notice()));
    html.push_str("</div></div>");
    html
}

fn hidden(name: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!(r#"<input type="hidden" name="{name}" value="{}">"#, escape(v)))
        .unwrap_or_default()
}

/// A search hit, with one save form per list.
#[must_use]
pub fn result_card(card: &ResultCard) -> String {
    if !card.is_renderable() {
        return String::new();
    }
    let record = card.record();
    let fields = [
        hidden("title", Some(record.title.as_str())),
        hidden("year", record.year.as_deref()),
        hidden("type", record.media_type.as_deref()),
        hidden("poster_url", record.poster_url.as_deref()),
    ]
    .concat();
    let actions: String = ListKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<form method="post" action="/view/{kind}">{fields}<button type="submit" class="btn btn-primary">Add to {}</button></form>"#,
                kind.rules().heading.trim_start_matches("My ")
            )
        })
        .collect();
    format!(
        r#"<div class="media-card">{}<div class="card-content">{}<div class="card-actions">{actions}</div>{}</div></div>"#,
        poster(record.poster_url.as_deref(), &record.title),
        heading(&record.title, record.year.as_deref(), record.media_type.as_deref()),
        notice(card.notice())
    )
}

/// GET form that re-renders `kind` with the chosen filters.
#[must_use]
pub fn filter_bar(filters: &Filters, kind: ListKind) -> String {
    let selected = filters.media_type.as_deref().unwrap_or("all");
    let options: String = TYPE_OPTIONS
        .iter()
        .map(|(value, label)| {
            let sel = if value.eq_ignore_ascii_case(selected) { " selected" } else { "" };
            format!(r#"<option value="{value}"{sel}>{label}</option>"#)
        })
        .collect();
    let clear = if filters.is_active() {
        format!(r#"<a class="clear-filters-btn" href="/?list={kind}">Clear Filters</a>"#)
    } else {
        String::new()
    };
    format!(
        r#"<form class="filter-bar" method="get" action="/"><input type="hidden" name="list" value="{kind}"><label>Filter by Type: <select name="type" class="filter-select">{options}</select></label><label>Filter by Year: <input name="year" class="filter-input" placeholder="Year (e.g., 2020)" value="{}"></label><button type="submit">Apply</button>{clear}</form>"#,
        escape(filters.year.as_deref().unwrap_or_default())
    )
}

#[must_use]
pub fn search_form(form: &SearchForm) -> String {
    let error = form
        .error()
        .map(|e| format!(r#"<div class="error-message">{}</div>"#, escape(e)))
        .unwrap_or_default();
    format!(
        r#"<form class="search-form" method="get" action="/"><input type="text" name="title" class="search-input" placeholder="Search for a movie or TV show..." value="{}"><button type="submit" class="search-button">Search</button>{error}</form>"#,
        escape(form.query())
    )
}

#[must_use]
pub fn list_view(list: &ListView) -> String {
    let count = list
        .count_label()
        .map(|c| format!(r#"<span class="list-count">{c}</span>"#))
        .unwrap_or_default();
    let mut html = format!(
        r#"<section class="media-list"><div class="list-header"><h2 class="list-title">{}</h2>{count}</div>"#,
        list.title()
    );
    if let ListSource::Saved(kind) = list.source() {
        html.push_str(&filter_bar(&list.filters, kind));
    }
    html.push_str(&notice(list.error()));
    if list.is_empty() {
        html.push_str(&format!(
            r#"<div class="empty-state"><p class="empty-message">{}</p></div>"#,
            escape(&list.empty_message())
        ));
    } else {
        html.push_str(r#"<div class="media-grid">"#);
        match list.source() {
            ListSource::Search => {
                for card in list.results() {
                    html.push_str(&result_card(card));
                }
            },
            ListSource::Saved(_) => {
                for card in list.visible() {
                    html.push_str(&saved_card(card));
                }
            },
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

/// The whole page: search form, results, then both saved lists.
#[must_use]
pub fn page(app: &App) -> String {
    let lists: String = ListKind::ALL.iter().map(|kind| list_view(app.saved(*kind))).collect();
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Movie/Show Tracker</title><style>{STYLE}</style></head><body><h1>Movie/Show Tracker</h1>{}{}{lists}</body></html>"#,
        search_form(&app.search),
        list_view(app.results())
    )
}
