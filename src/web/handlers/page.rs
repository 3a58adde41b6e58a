//! Portfolio page handler.

use axum::extract::State;

use super::contact::contact_fragment;
use crate::application::{ContactForm, PortfolioLoader};
use crate::error::AppError;
use crate::render::templates::PortfolioPage;
use crate::render::{Messages, PageDocument, Region, RenderTarget};
use crate::state::AppState;

/// Runs a full load pass and assembles the page.
///
/// Every call starts from a fresh document; nothing is cached between calls.
/// Section failures end up in their own regions, so this only fails if the
/// contact fragment cannot be rendered.
pub async fn build_page(loader: &PortfolioLoader) -> Result<PortfolioPage, AppError> {
    let locale = loader.locale();
    let messages = Messages::for_locale(locale);
    let page = PageDocument::new();

    let contact = loader.load_all(&page).await;
    let section = contact_fragment(&contact, &ContactForm::default(), None, messages)?;
    page.set_html(Region::ContactSection, section);

    Ok(PortfolioPage::from_document(
        &page,
        locale.html_lang(),
        messages,
    ))
}

/// Renders the portfolio.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/portfolio.html` with every region filled by the section
/// renderers.
pub async fn page_handler(State(state): State<AppState>) -> Result<PortfolioPage, AppError> {
    build_page(&state.loader).await
}
