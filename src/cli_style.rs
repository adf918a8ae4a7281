/*!
 * Planet Directory CLI Style System
 *
 * Styling utilities and the rendered views: header, planet list,
 * planet detail card, residents card and footer.
 */

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use console::{style, StyledObject};

use crate::detail::PlanetDetail;
use crate::model::Resident;
use crate::router::Route;
use crate::state::PlanetList;

pub const TITLE: &str = "Star Wars Planets Directory";
pub const FOOTER: &str = "© 2024 Star Wars";
pub const LOAD_MORE_LABEL: &str = "Explore More 🚀";
pub const HOME_LABEL: &str = "Home";

// ============================================================================
// THEME COLORS
// ============================================================================

/// Brand colors for consistent styling
pub struct Theme;

impl Theme {
    /// Primary accent color (yellow, like the opening crawl)
    pub fn primary<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).yellow()
    }

    /// Success color (green)
    pub fn success<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).green()
    }

    /// Warning color (yellow)
    pub fn warning<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).yellow()
    }

    /// Error color (red)
    pub fn error<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).red()
    }

    /// Muted/secondary text (dim)
    pub fn muted<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).dim()
    }

    /// Header style (bold yellow)
    pub fn header<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).yellow().bold()
    }
}

// ============================================================================
// ICONS
// ============================================================================

/// Unicode icons for visual feedback
pub struct Icons;

impl Icons {
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const WARNING: &'static str = "⚠";
    pub const INFO: &'static str = "ℹ";

    pub const PLANET: &'static str = "🪐";
    pub const ARROW_RIGHT: &'static str = "→";
}

// ============================================================================
// BOX DRAWING
// ============================================================================

/// Draw a styled header box
pub fn header_box(title: &str, subtitle: Option<&str>) {
    let width = 56;
    println!("{}", Theme::primary(format!("╔{}╗", "═".repeat(width))));
    boxed_line(&format!("{} {}", Icons::PLANET, title), width, true);
    if let Some(sub) = subtitle {
        boxed_line(sub, width, false);
    }
    println!("{}", Theme::primary(format!("╚{}╝", "═".repeat(width))));
}

fn boxed_line(text: &str, width: usize, emphasize: bool) {
    let len = text.chars().count().min(width);
    let padding = (width - len) / 2;
    let body = if emphasize {
        Theme::header(text).to_string()
    } else {
        Theme::muted(text).to_string()
    };
    println!(
        "{}{}{}{}{}",
        Theme::primary("║"),
        " ".repeat(padding),
        body,
        " ".repeat(width - padding - len),
        Theme::primary("║")
    );
}

/// Draw a section header with a line
pub fn section_header(title: &str) {
    let line_len = 50 - title.chars().count().min(40);
    println!(
        "\n{} {}",
        Theme::header(title),
        Theme::muted("─".repeat(line_len))
    );
}

// ============================================================================
// TABLES
// ============================================================================

/// Create a styled data table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a minimal table (no outer borders)
pub fn create_minimal_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Key-value rows: label in yellow, value bold
pub fn field_table(items: &[(&str, String)]) -> Table {
    let mut table = create_minimal_table();

    for (key, value) in items {
        table.add_row(vec![
            Cell::new(format!("{}:", key)).fg(Color::Yellow),
            Cell::new(value).add_attribute(Attribute::Bold),
        ]);
    }

    table
}

/// One row per loaded planet with its route
pub fn planet_list_table(list: &PlanetList) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Planet").add_attribute(Attribute::Bold),
        Cell::new("Route").add_attribute(Attribute::Bold),
    ]);

    for (index, planet) in list.planets().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index).fg(Color::DarkGrey),
            Cell::new(&planet.name).fg(Color::Yellow),
            Cell::new(Route::Planet(index)).fg(Color::DarkGrey),
        ]);
    }

    table
}

/// Climate, population and terrain of a planet
pub fn planet_detail_table(detail: &PlanetDetail) -> Table {
    let planet = detail.planet();
    field_table(&[
        ("Climate", planet.climate.clone()),
        ("Population", planet.population_label().to_string()),
        ("Terrain", planet.terrain.clone()),
    ])
}

/// Name, height, mass and gender per resident
pub fn residents_table(residents: &[Resident]) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Height").add_attribute(Attribute::Bold),
        Cell::new("Mass").add_attribute(Attribute::Bold),
        Cell::new("Gender").add_attribute(Attribute::Bold),
    ]);

    for resident in residents {
        table.add_row(vec![
            Cell::new(&resident.name).fg(Color::Yellow),
            Cell::new(&resident.height),
            Cell::new(&resident.mass),
            Cell::new(&resident.gender),
        ]);
    }

    table
}

// ============================================================================
// VIEWS
// ============================================================================

/// Page header
pub fn print_header() {
    println!();
    header_box(TITLE, Some(&format!("v{}", crate::VERSION)));
}

/// Page footer
pub fn print_footer() {
    println!("\n{}\n", Theme::muted(FOOTER));
}

/// List view
pub fn render_home(list: &PlanetList) {
    section_header("Planets");
    if list.is_empty() {
        println!("{}", Theme::muted("No planets loaded yet."));
    } else {
        println!("{}", planet_list_table(list));
    }
    if !list.has_more() && !list.is_empty() {
        println!("{}", Theme::muted("All planets loaded."));
    }
}

/// Detail view, including residents when they are visible
pub fn render_detail(detail: &PlanetDetail) {
    section_header(&detail.planet().name);
    println!("{}", planet_detail_table(detail));

    let panel = detail.residents();
    if panel.is_visible() {
        section_header("Residents");
        if panel.residents().is_empty() {
            println!("{}", Theme::muted("No known residents."));
        } else {
            println!("{}", residents_table(panel.residents()));
        }
    }
}

/// Shown in place of a detail view whose index no longer resolves
pub fn render_missing_planet(route: Route, loaded: usize) {
    print_warning(&format!(
        "Nothing at {} ({} planets loaded)",
        route, loaded
    ));
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Print a styled error message with optional suggestion
pub fn print_error(message: &str, suggestion: Option<&str>) {
    eprintln!(
        "\n{} {}",
        Theme::error(format!("{} Error:", Icons::ERROR)),
        message
    );

    if let Some(hint) = suggestion {
        eprintln!(
            "  {} {}",
            Theme::muted(Icons::ARROW_RIGHT),
            Theme::muted(hint)
        );
    }
    eprintln!();
}

/// Print a styled warning message
pub fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        Theme::warning(Icons::WARNING),
        Theme::warning(message)
    );
}

/// Print a styled info message
pub fn print_info(message: &str) {
    println!("{} {}", Theme::primary(Icons::INFO), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanetPage;
    use crate::source::mock::{planet, resident};

    fn list() -> PlanetList {
        let mut list = PlanetList::new();
        list.append_page(PlanetPage {
            results: vec![planet("Tatooine", "200000"), planet("Alderaan", "unknown")],
            next: Some("http://api/p2".to_string()),
        });
        list
    }

    #[test]
    fn test_list_table_has_row_per_planet() {
        let rendered = planet_list_table(&list()).to_string();
        assert!(rendered.contains("Tatooine"));
        assert!(rendered.contains("/planet/1"));
        assert!(rendered.contains("Alderaan"));
    }

    #[test]
    fn test_detail_table_uses_population_label() {
        let detail = PlanetDetail::resolve(&list(), 1).unwrap();
        let rendered = planet_detail_table(&detail).to_string();
        assert!(rendered.contains("Population:"));
        assert!(rendered.contains("Unknown"));
        assert!(!rendered.contains("unknown"));
        assert!(rendered.contains("Climate:"));
        assert!(rendered.contains("Terrain:"));
    }

    #[test]
    fn test_residents_table_fields() {
        let rendered = residents_table(&[resident("Owen Lars")]).to_string();
        for expected in ["Name", "Height", "Mass", "Gender", "Owen Lars", "172", "77"] {
            assert!(rendered.contains(expected), "missing {expected}");
        }
    }
}
