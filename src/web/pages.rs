use crate::models::{
    apartment::Apartment,
    filter::{RangeFilter, PRICE_DOMAIN, ROOM_DOMAIN, SIZE_DOMAIN},
};

use super::view::ListingView;

const PROJECT_NAME: &str = "Bauprojekt Kantnergasse";

const CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:system-ui,sans-serif;color:#0f172a;background:#fff;display:flex;flex-direction:column;min-height:100vh}
a{color:inherit;text-decoration:none}a:hover{text-decoration:underline}
.container{max-width:1200px;margin:0 auto;padding:0 1.5rem}
header{position:sticky;top:0;z-index:50;border-bottom:1px solid #e2e8f0;background:rgba(255,255,255,.95)}
header .container{display:flex;align-items:center;height:3.5rem}
.brand{display:flex;align-items:center;gap:.5rem;font-weight:700}
nav{margin-left:auto;display:flex;gap:1.5rem;font-size:.875rem;font-weight:500}
main{flex:1}
section{padding:4rem 0}
.muted-bg{background:#f1f5f9}
.muted{color:#64748b}
.split{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:3rem;align-items:center}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:1.5rem}
h1{font-size:3rem;font-weight:700;letter-spacing:-.05em}
h2{font-size:2.25rem;font-weight:700;letter-spacing:-.05em;margin-bottom:2rem}
.stack>*+*{margin-top:1rem}
img{border-radius:.5rem;object-fit:cover;max-width:100%}
.btn{display:inline-flex;align-items:center;justify-content:center;gap:.5rem;border-radius:.375rem;padding:.5rem 1rem;font-size:.875rem;font-weight:500;background:#0f172a;color:#fff;border:1px solid #0f172a;cursor:pointer}
.btn-outline{background:#fff;color:#0f172a;border-color:#e2e8f0;width:100%}
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.5rem;padding:1.5rem}
.card h3{font-size:1.5rem;font-weight:600;margin-bottom:1rem}
.card footer{display:flex;flex-direction:column;gap:.5rem;margin-top:1rem}
.filters{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:1.5rem;margin-bottom:2rem}
.filters label{font-weight:500;font-size:.875rem}
.filters input[type=range]{width:100%}
.bounds{display:flex;justify-content:space-between;font-size:.875rem;color:#64748b}
.map{aspect-ratio:16/9;background:#f1f5f9;border-radius:.5rem;display:flex;align-items:center;justify-content:center}
.agent{display:flex;align-items:center;gap:1rem}
input,textarea{width:100%;border:1px solid #e2e8f0;border-radius:.375rem;padding:.5rem .75rem;font:inherit}
body>footer{border-top:1px solid #e2e8f0}
body>footer .container{display:flex;flex-wrap:wrap;gap:1rem;padding:1.5rem;font-size:.75rem;align-items:center}
body>footer nav{font-size:.75rem;font-weight:400}
"#;

/// A min/max pair of range inputs bound to one attribute of the filter.
struct RangeControl {
    label: &'static str,
    name: &'static str,
    domain: RangeFilter,
    step: u32,
    current: RangeFilter,
    unit: fn(u32) -> String,
}

impl RangeControl {
    fn render(&self) -> String {
        format!(
            r#"<div class="control">
                <label>{label}</label>
                {low}
                {high}
                <div class="bounds"><span>{min}</span><span>{max}</span></div>
            </div>"#,
            label = self.label,
            low = self.input("min", self.current.min),
            high = self.input("max", self.current.max),
            min = (self.unit)(self.current.min),
            max = (self.unit)(self.current.max),
        )
    }

    fn input(&self, bound: &str, value: u32) -> String {
        format!(
            r#"<input type="range" name="{name}_{bound}" aria-label="{label} {bound}" min="{min}" max="{max}" step="{step}" value="{value}" onchange="this.form.submit()">"#,
            name = self.name,
            label = self.label,
            min = self.domain.min,
            max = self.domain.max,
            step = self.step,
        )
    }
}

/// Formats with German thousands separators, e.g. `450.000`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_euro(value: u32) -> String {
    format!("{} €", format_thousands(value))
}

fn format_rooms(value: u32) -> String {
    format!("{value} Zimmer")
}

fn format_size(value: u32) -> String {
    format!("{value} m²")
}

pub fn render_landing(view: &ListingView, visible: &[&Apartment], year: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{PROJECT_NAME} 44</title>
<style>{CSS}</style>
</head>
<body>
{header}
<main>
{hero}
{listing}
{location}
{contact}
</main>
{footer}
</body>
</html>"#,
        header = render_header(),
        hero = render_hero(),
        listing = render_listing(view, visible),
        location = render_location(),
        contact = render_contact(),
        footer = render_footer(year),
    )
}

fn render_header() -> String {
    format!(
        r##"<header>
<div class="container">
    <a href="/" class="brand"><img src="/logo.svg" alt="Logo" width="32" height="32"><span>{PROJECT_NAME}</span></a>
    <nav>
        <a href="#projekt">Projekt</a>
        <a href="#wohnungen">Wohnungen</a>
        <a href="#lage">Lage</a>
        <a href="#kontakt">Kontakt</a>
    </nav>
</div>
</header>"##
    )
}

fn render_hero() -> String {
    r##"<section id="projekt">
<div class="container split">
    <img src="/placeholder.svg" alt="Projekt Hero Bild" width="600" height="400">
    <div class="stack">
        <h1>Bauprojekt Kantnergasse 44</h1>
        <p class="muted">
            Erleben Sie modernes Wohnen in unserem neuesten Bauprojekt in der Kantnergasse 44. Entworfen mit Komfort und Stil im Sinn,
            bieten unsere 20 einzigartigen Wohnungen die perfekte Mischung aus Luxus und Funktionalität.
        </p>
        <button type="button" class="btn">Mehr erfahren</button>
    </div>
</div>
</section>"##
        .to_string()
}

fn render_listing(view: &ListingView, visible: &[&Apartment]) -> String {
    let controls = [
        RangeControl {
            label: "Preis (€)",
            name: "price",
            domain: PRICE_DOMAIN,
            step: 10_000,
            current: view.filter.price,
            unit: format_euro,
        },
        RangeControl {
            label: "Zimmeranzahl",
            name: "rooms",
            domain: ROOM_DOMAIN,
            step: 1,
            current: view.filter.rooms,
            unit: format_rooms,
        },
        RangeControl {
            label: "Größe (m²)",
            name: "size",
            domain: SIZE_DOMAIN,
            step: 5,
            current: view.filter.size,
            unit: format_size,
        },
    ];

    let cards = if visible.is_empty() {
        r#"<p class="muted">Keine Wohnungen entsprechen Ihren Filterkriterien.</p>"#.to_string()
    } else {
        visible.iter().map(|apartment| render_card(apartment)).collect()
    };

    format!(
        r##"<section id="wohnungen" class="muted-bg">
<div class="container">
    <h2>Verfügbare Wohnungen</h2>
    <form method="get" action="/#wohnungen">
        <input type="hidden" name="seed" value="{seed}">
        <div class="filters">{controls}</div>
        <noscript><button type="submit" class="btn">Filtern</button></noscript>
    </form>
    <p class="muted">{count} von {total} Wohnungen</p>
    <div class="grid">{cards}</div>
</div>
</section>"##,
        seed = view.seed,
        controls = controls.iter().map(RangeControl::render).collect::<String>(),
        count = visible.len(),
        total = view.apartments.len(),
    )
}

fn render_card(apartment: &Apartment) -> String {
    format!(
        r#"<article class="card" id="wohnung-{id}">
    <h3>Wohnung {id}</h3>
    <img src="/placeholder.svg" alt="Wohnung {id}" width="300" height="200">
    <div class="stack">
        <p class="muted">{description}</p>
        <p>Preis: {price}</p>
        <p>Größe: {size}</p>
        <p>Zimmer: {rooms}</p>
    </div>
    <footer>
        <button type="button" class="btn btn-outline">Grundriss herunterladen</button>
        <button type="button" class="btn btn-outline">Exposé herunterladen</button>
    </footer>
</article>"#,
        id = apartment.id,
        description = apartment.description,
        price = format_euro(apartment.price),
        size = format_size(apartment.size),
        rooms = apartment.rooms,
    )
}

fn render_location() -> String {
    r#"<section id="lage">
<div class="container split">
    <div class="stack">
        <h2>Erstklassige Lage</h2>
        <p class="muted">
            Unser Projekt in der Kantnergasse 44 mit 20 exklusiven Wohnungen befindet sich im Herzen der Stadt und bietet einfachen Zugang zu öffentlichen Verkehrsmitteln,
            Einkaufszentren und Freizeiteinrichtungen.
        </p>
        <ul class="stack">
            <li>5 Minuten zur nächsten U-Bahn-Station</li>
            <li>10 Minuten zur Innenstadt</li>
            <li>Mehrere Parks in Gehweite</li>
        </ul>
    </div>
    <div class="map"><p class="muted">Kartenplatzhalter</p></div>
</div>
</section>"#
        .to_string()
}

fn render_contact() -> String {
    // The inquiry form has no backend and never leaves the page.
    r#"<section id="kontakt" class="muted-bg">
<div class="container">
    <h2>Kontaktieren Sie uns</h2>
    <div class="split">
        <div class="card">
            <h3>Immobilienmakler</h3>
            <div class="agent">
                <img src="/placeholder.svg" alt="Immobilienmakler Foto" width="100" height="100" style="border-radius:50%">
                <div class="stack">
                    <p>+49 123 456 7890</p>
                    <p>makler@beispiel.de</p>
                </div>
            </div>
        </div>
        <div class="card">
            <h3>Anfrageformular</h3>
            <form class="stack" onsubmit="return false;">
                <input type="text" placeholder="Ihr Name">
                <input type="email" placeholder="Ihre E-Mail">
                <input type="tel" placeholder="Ihre Telefonnummer">
                <textarea placeholder="Ihre Nachricht"></textarea>
                <button type="submit" class="btn">Anfrage senden</button>
            </form>
        </div>
    </div>
</div>
</section>"#
        .to_string()
}

fn render_footer(year: i32) -> String {
    format!(
        r##"<footer>
<div class="container">
    <p class="muted">© {year} {PROJECT_NAME}. Alle Rechte vorbehalten.</p>
    <nav>
        <a href="#">Nutzungsbedingungen</a>
        <a href="#">Datenschutz</a>
    </nav>
</div>
</footer>"##
    )
}
