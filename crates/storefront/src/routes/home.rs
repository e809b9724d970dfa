//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::{OptionalAuth, SessionCart};
use crate::routes::Layout;
use crate::routes::products::{ProductCardView, featured_cards};
use crate::state::AppState;

/// A selling point shown under the hero.
#[derive(Clone, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Selling points, in display order.
const FEATURES: [Feature; 4] = [
    Feature {
        icon: "☕",
        title: "Qualité Premium",
        text: "Cafés sélectionnés avec soin auprès des meilleures plantations mondiales.",
    },
    Feature {
        icon: "🚚",
        title: "Livraison Rapide",
        text: "Expédition sous 24h pour une fraîcheur optimale de vos cafés.",
    },
    Feature {
        icon: "🏆",
        title: "Expertise",
        text: "Plus de 6 ans d'expérience dans l'import de cafés d'exception.",
    },
    Feature {
        icon: "🤝",
        title: "Commerce Équitable",
        text: "Partenariats directs avec les producteurs pour un commerce éthique.",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub featured: Vec<ProductCardView>,
    pub features: Vec<Feature>,
}

/// Display home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    cart: SessionCart,
) -> impl IntoResponse {
    HomeTemplate {
        layout: Layout::new(user.as_ref(), cart.cart()),
        featured: featured_cards(&state),
        features: FEATURES.to_vec(),
    }
}
