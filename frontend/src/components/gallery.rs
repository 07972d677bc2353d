use web_sys::{Event, HtmlImageElement};
use yew::prelude::*;

use crate::content::GALLERY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
}

impl ImageLoad {
    pub fn style(self) -> &'static str {
        match self {
            ImageLoad::Pending => "opacity: 0; transition: opacity 0.3s ease;",
            ImageLoad::Loaded => "opacity: 1; transition: opacity 0.3s ease;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Fades an image in once it has loaded.
#[function_component(GalleryImage)]
pub fn gallery_image(props: &GalleryImageProps) -> Html {
    let load = use_state_eq(ImageLoad::default);
    let img_ref = use_node_ref();

    // Cached images may finish before the load listener is attached
    {
        let load = load.clone();
        let img_ref = img_ref.clone();
        use_effect_with_deps(
            move |_| {
                if img_ref.cast::<HtmlImageElement>().map_or(false, |img| img.complete()) {
                    load.set(ImageLoad::Loaded);
                }
                || ()
            },
            props.src.clone(),
        );
    }

    let onload = {
        let load = load.clone();
        Callback::from(move |_: Event| load.set(ImageLoad::Loaded))
    };

    html! {
        <div class="gallery-item">
            <img
                ref={img_ref}
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                style={load.style()}
                {onload}
            />
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="gallery" class="gallery-section">
            <div class="container">
                <h2 class="section-title">{"Our Work"}</h2>
                <div class="gallery-grid">
                    { for GALLERY.iter().map(|entry| html! {
                        <GalleryImage key={entry.src} src={entry.src} alt={entry.alt} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_start_hidden_and_fade_in() {
        assert!(ImageLoad::default().style().starts_with("opacity: 0;"));
        assert!(ImageLoad::Loaded.style().starts_with("opacity: 1;"));
        assert!(ImageLoad::Pending.style().contains("transition: opacity 0.3s ease"));
    }
}
