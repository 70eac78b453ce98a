#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use ::common::{config::SiteConfig, preloader::Phase};

mod common;
use crate::common::{theme::use_theme_provider, toast::{Toaster, use_toast_provider}};

mod components;
use components::preloader::{Preloader, use_preloader};

mod home;
use home::{Home, NotFound};

mod sections;

const SITE_CONFIG: &str = include_str!("../site.toml");

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const FONTS: &str = "https://fonts.googleapis.com/css2?family=Orbitron:wght@500;700&family=Poppins:wght@300;400;500;600&display=swap";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| SiteConfig::load_or_default(SITE_CONFIG));

    use_theme_provider(&config.theme.storage_key);
    use_toast_provider(|| config.toast_bus());

    let preloader = config.preloader();
    let phase = use_preloader(preloader);
    let fade_ms = preloader.fade_out.num_milliseconds().max(0);

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Link { rel: "stylesheet", href: FONTS }
        style { "{crate::common::style::SITE_STYLES}" }
        if phase() != Phase::Splash {
            Router::<Route> { config: RouterConfig::default }
        }
        if phase() != Phase::Open {
            Preloader { fading: phase() == Phase::FadingOut, fade_ms: fade_ms as u32 }
        }
        Toaster {}
    }
}
