use yew::prelude::*;

use crate::carousel::{self, Carousel};
use crate::util::clog;

// Stand-in listing photos; a real deployment renders these server-side.
const PHOTOS: [(&str, &str); 4] = [
    ("Front of house", "linear-gradient(135deg, #1f6feb, #0e4429)"),
    ("Living room", "linear-gradient(135deg, #8957e5, #1f2d3d)"),
    ("Kitchen", "linear-gradient(135deg, #d29922, #4d3b1f)"),
    ("Backyard", "linear-gradient(135deg, #2ea043, #082235)"),
];

const PAGE_CSS: &str = "
.carousel-slide { display:none; }
.carousel-prev, .carousel-next { position:absolute; top:50%; transform:translateY(-50%); background:rgba(22,27,34,0.8); color:#e6edf3; border:1px solid #30363d; border-radius:6px; font-size:20px; padding:4px 10px; cursor:pointer; }
.carousel-prev { left:10px; }
.carousel-next { right:10px; }
.dot { width:10px; height:10px; border-radius:50%; background:#30363d; cursor:pointer; }
.dot.active { background:#58a6ff; }
";

#[function_component(App)]
pub fn app() -> Html {
    // Bind the carousel controller once the markup below exists.
    use_effect_with((), move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(c) = Carousel::mount(&document) {
                clog(&format!("carousel: bound {} slides", c.slide_count()));
            }
        }
        || ()
    });

    html! {
        <div style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:sans-serif; display:flex; align-items:center; justify-content:center;">
            <style>{ PAGE_CSS }</style>
            <div style="width:min(640px, 92vw);">
                <h2 style="margin:0 0 12px 0;">{"12 Wattle St, Taringa"}</h2>
                <div id={carousel::ROOT_ID} style="position:relative; background:#161b22; border:1px solid #30363d; border-radius:8px; overflow:hidden;">
                    { for PHOTOS.iter().map(|(caption, backdrop)| html! {
                        <div class="carousel-slide" style={format!("position:relative; height:360px; background:{backdrop};")}>
                            <div style="position:absolute; left:14px; bottom:34px; font-size:14px; background:rgba(14,17,22,0.7); border-radius:4px; padding:2px 8px;">
                                { *caption }
                            </div>
                        </div>
                    }) }
                    <button class="carousel-prev">{"‹"}</button>
                    <button class="carousel-next">{"›"}</button>
                    <div style="position:absolute; bottom:10px; left:50%; transform:translateX(-50%); display:flex; gap:6px;">
                        { for (0..PHOTOS.len()).map(|_| html! { <span class="dot"></span> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
