//! Server-rendered HTML pages

use std::f64::consts::PI;
use std::fmt::Write;

use crate::domain::{Developer, SkillName, Skills};
use crate::forms::FormSnapshot;

/// Lowest rating drawn on the radar; smaller ratings sit at the centre
pub const RADAR_MIN: u32 = 50;
/// Highest rating drawn on the radar; larger ratings sit on the rim
pub const RADAR_MAX: u32 = 99;

const RADAR_SIZE: f64 = 320.0;
const RADAR_RADIUS: f64 = 120.0;
const RADAR_RINGS: u32 = 4;

/// How a form field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Hidden,
}

/// One input of the developer form
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind }
}

/// Profile inputs, in display order
pub const PROFILE_FIELDS: [FormField; 6] = [
    field("id", "Id", FieldKind::Hidden),
    field("name", "Name", FieldKind::Text),
    field("imageUrl", "Image Url", FieldKind::Text),
    field("location", "Location", FieldKind::Text),
    field("position", "Position", FieldKind::Text),
    field("experienceYears", "XP Years", FieldKind::Number),
];

/// Skill inputs, in display order
pub const SKILL_FIELDS: [FormField; 6] = [
    field("communicative", "communicative", FieldKind::Number),
    field("immaculate", "immaculate", FieldKind::Number),
    field("problemsolver", "problemsolver", FieldKind::Number),
    field("timely", "timely", FieldKind::Number),
    field("tinker", "tinker", FieldKind::Number),
    field("efficient", "efficient", FieldKind::Number),
];

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: Lato, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
            color: #333;
        }}
        .nav {{
            background: #2563eb;
            padding: 1rem;
            margin: -2rem -2rem 2rem -2rem;
        }}
        .nav a {{ color: white; text-decoration: none; margin-right: 1rem; }}
        .pills {{ padding: 0; }}
        .pill {{
            background: #2563eb;
            border-radius: 1rem;
            display: flex;
            align-items: center;
            list-style: none;
            margin: 1rem;
            overflow: hidden;
        }}
        .pill a {{ color: white; letter-spacing: 1px; padding: 0 1rem; text-decoration: none; }}
        .card {{ background: #929292; border-radius: 1rem; overflow: hidden; width: 28rem; text-align: center; }}
        .detail {{ display: flex; gap: 2rem; align-items: flex-start; }}
        .columns {{ display: flex; gap: 2rem; }}
        label {{ display: block; margin-top: 0.5rem; }}
        .error {{ color: #ef4444; }}
        .banner {{ background: #fef3c7; border: 1px solid #f59e0b; border-radius: 6px; padding: 1rem; }}
    </style>
</head>
<body>
    <div class="nav">
        <a href="/">Developers</a>
        <a href="/devs/add">Add Developer</a>
    </div>
{content}
</body>
</html>"#,
        title = escape_html(title),
        content = content
    )
}

/// Developer pills linking to their detail pages
pub fn developer_list_page(developers: &[Developer]) -> String {
    let mut content = String::from("    <a href=\"/devs/add\">Add Developer</a>\n");

    if developers.is_empty() {
        content.push_str("    <p>No developers yet</p>\n");
        return layout("Developers", &content);
    }

    content.push_str("    <ul class=\"pills\">\n");
    for developer in developers {
        let _ = writeln!(
            content,
            r#"        <li class="pill"><img alt="{name}" src="{image}" width="44" height="44"><a href="/devs/{id}"><h2>{name}</h2></a><span>{position} · {location}</span></li>"#,
            id = escape_html(developer.id.as_str()),
            name = escape_html(&developer.name),
            image = escape_html(&developer.image_url),
            position = escape_html(&developer.position),
            location = escape_html(&developer.location),
        );
    }
    content.push_str("    </ul>\n");

    layout("Developers", &content)
}

/// Detail card and skill radar for one developer
pub fn developer_detail_page(developer: &Developer) -> String {
    let content = format!(
        r#"    <div class="detail">
        <div class="card">
            <a href="/devs/{id}/edit">edit</a>
            <img alt="{name}" src="{image}" width="280" height="280">
            <h3>{name}</h3>
            <h4>{position}</h4>
            <h4>{years} years xp</h4>
            <h4>{location}</h4>
        </div>
        {radar}
    </div>
"#,
        id = escape_html(developer.id.as_str()),
        name = escape_html(&developer.name),
        image = escape_html(&developer.image_url),
        position = escape_html(&developer.position),
        years = developer.experience_years,
        location = escape_html(&developer.location),
        radar = RadarChart::new(&developer.skills).to_svg(),
    );
    layout(&developer.name, &content)
}

pub fn not_found_page(id: &str) -> String {
    let content = format!(
        "    <h1>Developer not found</h1>\n    <p>No developer with id <code>{}</code>.</p>\n",
        escape_html(id)
    );
    layout("Not found", &content)
}

/// Render the developer form from its current field state.
///
/// Fields absent from the snapshot are skipped, so the add form omits the
/// hidden `id`. `banner` shows errors that belong to no single field.
pub fn developer_form_page(
    title: &str,
    action: &str,
    form: &FormSnapshot,
    banner: Option<&str>,
) -> String {
    let mut content = format!("    <h1>{}</h1>\n", escape_html(title));
    if let Some(banner) = banner {
        let _ = writeln!(content, "    <p class=\"banner\">{}</p>", escape_html(banner));
    }

    let _ = writeln!(
        content,
        r#"    <form method="post" action="{}">"#,
        escape_html(action)
    );
    content.push_str("    <div class=\"columns\">\n        <fieldset>\n            <legend>Developer Info</legend>\n");
    render_fields(&mut content, form, &PROFILE_FIELDS);
    content.push_str("        </fieldset>\n        <fieldset>\n            <legend>Developer Skills</legend>\n");
    render_fields(&mut content, form, &SKILL_FIELDS);
    content.push_str(
        "        </fieldset>\n    </div>\n    <button type=\"submit\">Save</button>\n    <a href=\"/\">Cancel</a>\n    </form>\n",
    );

    layout(title, &content)
}

fn render_fields(out: &mut String, form: &FormSnapshot, fields: &[FormField]) {
    for field in fields.iter().filter(|f| form.contains(f.name)) {
        let value = escape_html(form.text(field.name));
        match field.kind {
            FieldKind::Hidden => {
                let _ = writeln!(
                    out,
                    r#"            <input type="hidden" name="{}" value="{}">"#,
                    field.name, value
                );
            }
            FieldKind::Text | FieldKind::Number => {
                let input_type = if field.kind == FieldKind::Number {
                    "number"
                } else {
                    "text"
                };
                let _ = writeln!(
                    out,
                    r#"            <label>{label} <input type="{input_type}" name="{name}" value="{value}"></label>"#,
                    label = escape_html(field.label),
                    name = field.name,
                );
                if let Some(error) = form.error(field.name) {
                    let _ = writeln!(
                        out,
                        r#"            <span class="error">{}</span>"#,
                        escape_html(error)
                    );
                }
            }
        }
    }
}

/// Geometry of the skill radar chart.
///
/// Axes start at the top and run clockwise in [`SkillName::ALL`] order.
/// Ratings are clamped to `RADAR_MIN..=RADAR_MAX` before scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    axes: Vec<(SkillName, u32)>,
}

impl RadarChart {
    pub fn new(skills: &Skills) -> Self {
        Self {
            axes: skills.iter().collect(),
        }
    }

    /// Distance from the centre as a fraction of the radius
    pub fn ratio(rating: u32) -> f64 {
        let clamped = rating.clamp(RADAR_MIN, RADAR_MAX);
        f64::from(clamped - RADAR_MIN) / f64::from(RADAR_MAX - RADAR_MIN)
    }

    fn angle(&self, index: usize) -> f64 {
        -PI / 2.0 + 2.0 * PI * index as f64 / self.axes.len() as f64
    }

    fn point(&self, index: usize, ratio: f64) -> (f64, f64) {
        let centre = RADAR_SIZE / 2.0;
        let angle = self.angle(index);
        (
            centre + RADAR_RADIUS * ratio * angle.cos(),
            centre + RADAR_RADIUS * ratio * angle.sin(),
        )
    }

    /// Polygon vertices for the ratings, in axis order
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.axes
            .iter()
            .enumerate()
            .map(|(i, (_, rating))| self.point(i, Self::ratio(*rating)))
            .collect()
    }

    fn polygon(&self, points: &[(f64, f64)]) -> String {
        points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg class="radar" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            size = RADAR_SIZE
        );

        for ring in 1..=RADAR_RINGS {
            let ratio = f64::from(ring) / f64::from(RADAR_RINGS);
            let ring_points: Vec<_> = (0..self.axes.len()).map(|i| self.point(i, ratio)).collect();
            let _ = write!(
                svg,
                r##"<polygon points="{}" fill="none" stroke="#d1d5db"/>"##,
                self.polygon(&ring_points)
            );
        }

        let _ = write!(
            svg,
            r#"<polygon points="{}" fill="rgba(75,192,192,0.4)" stroke="rgba(75,192,192,1)"/>"#,
            self.polygon(&self.points())
        );

        for (i, (skill, rating)) in self.axes.iter().enumerate() {
            let (x, y) = self.point(i, 1.15);
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11"><title>{}</title>{}</text>"#,
                x, y, rating, skill
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeveloperId, Skills};
    use crate::forms::FormStore;

    fn skills(rating: u32) -> Skills {
        Skills {
            communicative: rating,
            efficient: rating,
            immaculate: rating,
            problemsolver: rating,
            timely: rating,
            tinker: rating,
        }
    }

    fn developer(name: &str) -> Developer {
        Developer {
            id: DeveloperId::new("dev-1").unwrap(),
            name: name.to_string(),
            position: "Engineer".to_string(),
            location: "Berlin".to_string(),
            experience_years: 7,
            image_url: "https://example.com/a.png".to_string(),
            skills: skills(75),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_radar_ratio_is_clamped() {
        assert_eq!(RadarChart::ratio(0), 0.0);
        assert_eq!(RadarChart::ratio(RADAR_MIN), 0.0);
        assert_eq!(RadarChart::ratio(RADAR_MAX), 1.0);
        assert_eq!(RadarChart::ratio(100), 1.0);
        assert!((RadarChart::ratio(74) - 24.0 / 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_radar_first_axis_points_up() {
        let chart = RadarChart::new(&skills(RADAR_MAX));
        let points = chart.points();
        assert_eq!(points.len(), 6);

        let (x, y) = points[0];
        assert!((x - RADAR_SIZE / 2.0).abs() < 1e-9);
        assert!((y - (RADAR_SIZE / 2.0 - RADAR_RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn test_radar_floor_collapses_to_centre() {
        let chart = RadarChart::new(&skills(10));
        for (x, y) in chart.points() {
            assert!((x - RADAR_SIZE / 2.0).abs() < 1e-9);
            assert!((y - RADAR_SIZE / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_radar_svg_labels_every_skill() {
        let svg = RadarChart::new(&skills(60)).to_svg();
        assert!(svg.starts_with("<svg"));
        for skill in SkillName::ALL {
            assert!(svg.contains(skill.as_str()));
        }
    }

    #[test]
    fn test_list_page_empty_and_escaped() {
        assert!(developer_list_page(&[]).contains("No developers yet"));

        let page = developer_list_page(&[developer("<script>")]);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("href=\"/devs/dev-1\""));
    }

    #[test]
    fn test_detail_page_links_to_edit() {
        let page = developer_detail_page(&developer("Ada"));
        assert!(page.contains("/devs/dev-1/edit"));
        assert!(page.contains("7 years xp"));
        assert!(page.contains("<svg"));
    }

    #[test]
    fn test_form_page_shows_values_and_errors() {
        let mut store = FormStore::new("AddDeveloper");
        store.add_field("name", "", "");
        store.add_field("timely", "55", "55");
        store.change_value("name", "A \"quoted\" name");
        store.set_error("timely", "is required");

        let page = developer_form_page("Add Developer", "/devs/add", store.snapshot(), None);
        assert!(page.contains(r#"value="A &quot;quoted&quot; name""#));
        assert!(page.contains("is required"));
        assert!(!page.contains("type=\"hidden\""));
        assert!(!page.contains("name=\"location\""));
    }
}
