//! Text pages rendered for each view.

use std::fmt::{self, Write};

use svetlana_application::{DocumentApi, DocumentStore, LazyViews, Navigation};
use svetlana_domain::{ClientSettings, Document, ViewKey};

/// A loaded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Which view this is.
    pub key: ViewKey,
    /// Heading shown above the page body.
    pub title: &'static str,
}

impl Page {
    const fn new(key: ViewKey) -> Self {
        let title = match key {
            ViewKey::MainLayout => "Робот Светлана",
            ViewKey::CreateDocumentPage => "Создание документа",
            ViewKey::HistoryPage => "История документов",
            ViewKey::TemplatesPage => "Шаблоны",
            ViewKey::SettingsPage => "Настройки",
            ViewKey::ErrorNotFound => "Страница не найдена",
        };
        Self { key, title }
    }
}

const ALL_VIEWS: [ViewKey; 6] = [
    ViewKey::MainLayout,
    ViewKey::CreateDocumentPage,
    ViewKey::HistoryPage,
    ViewKey::TemplatesPage,
    ViewKey::SettingsPage,
    ViewKey::ErrorNotFound,
];

/// Registers a loader for every view.
#[must_use]
pub fn registry() -> LazyViews<Page> {
    ALL_VIEWS.into_iter().fold(LazyViews::new(), |views, key| {
        views.register(key, move || async move {
            tracing::debug!(view = %key, "view loaded");
            Ok(Page::new(key))
        })
    })
}

/// What pages need to render themselves.
pub struct Context<'a, A: DocumentApi> {
    /// Shared document store.
    pub store: &'a DocumentStore<A>,
    /// API client, for endpoints without a store.
    pub api: &'a A,
    /// Effective settings.
    pub settings: &'a ClientSettings,
}

/// Renders the navigated route as text, outermost view first.
///
/// # Errors
///
/// Fails only if writing to the output buffer fails.
pub async fn render<A: DocumentApi>(
    nav: &Navigation<Page>,
    ctx: &Context<'_, A>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for page in &nav.views {
        writeln!(out, "== {} ==", page.title)?;
        match page.key {
            ViewKey::MainLayout => {}
            ViewKey::CreateDocumentPage => {
                out.push_str("Опишите документ, и Светлана подготовит черновик.\n");
            }
            ViewKey::HistoryPage => render_history(&mut out, ctx.store).await?,
            ViewKey::TemplatesPage => match ctx.api.list_templates().await {
                Ok(templates) if templates.is_empty() => out.push_str("Шаблонов нет\n"),
                Ok(templates) => {
                    for name in templates {
                        writeln!(out, "- {name}")?;
                    }
                }
                Err(error) => {
                    tracing::error!(%error, "failed to load templates");
                    out.push_str("Не удалось загрузить шаблоны\n");
                }
            },
            ViewKey::SettingsPage => {
                writeln!(out, "API: {}", ctx.settings.api_base_url)?;
                writeln!(out, "Таймаут: {} с", ctx.settings.request_timeout_secs)?;
            }
            ViewKey::ErrorNotFound => {
                writeln!(out, "{}", nav.route.path)?;
            }
        }
    }

    Ok(out)
}

async fn render_history<A: DocumentApi>(
    out: &mut String,
    store: &DocumentStore<A>,
) -> fmt::Result {
    store.fetch_documents().await;
    let state = store.snapshot();

    if let Some(error) = &state.error {
        writeln!(out, "{error}")?;
    }
    if state.documents.is_empty() {
        if state.error.is_none() {
            out.push_str("Документов пока нет\n");
        }
        return Ok(());
    }

    writeln!(out, "Всего: {}", state.document_count())?;
    for document in &state.documents {
        writeln!(out, "- {}", describe(document))?;
    }
    Ok(())
}

fn describe(document: &Document) -> String {
    document.metadata().map_or_else(
        || document.as_value().to_string(),
        |meta| {
            format!(
                "{}  {}  {}",
                meta.created_at.format("%d.%m.%Y %H:%M"),
                meta.document_type,
                meta.display_name
            )
        },
    )
}
