use today_core::{Status, TodayViewModel, WeatherLine};

use super::art::AsciiArt;
use super::layout::{frame, Geometry};
use super::sink::{DrawCommand, Tone};

pub const LABEL: &str = "Today";

// Stops of the "atlas" gradient used on the time.
const ATLAS: [(u8, u8, u8); 3] = [(0xfe, 0xac, 0x5e), (0xc7, 0x79, 0xd0), (0x4b, 0xc0, 0xc8)];

/// Lays the whole widget out as draw commands: frame, date, time art and
/// weather line. Every text is clipped to the inside of the box.
pub fn render(geometry: Geometry, view: &TodayViewModel, art: &dyn AsciiArt) -> Vec<DrawCommand> {
    let mut cmds = frame(geometry, LABEL);
    if geometry.inner_width() == 0 || geometry.inner_height() == 0 {
        return cmds;
    }

    cmds.extend(render_date(geometry, &view.date));
    cmds.extend(render_time(geometry, &art.render(&view.time, view.font)));
    cmds.extend(render_weather(geometry, &view.weather));
    cmds
}

fn render_date(geometry: Geometry, date: &str) -> Option<DrawCommand> {
    // One blank column between the date and the right border.
    let text = clip(date, geometry.inner_width().saturating_sub(1));
    if text.is_empty() {
        return None;
    }
    let col = geometry.right().saturating_sub(1).saturating_sub(width_of(&text));
    Some(DrawCommand::text(col, geometry.top.saturating_add(1), text, Tone::Date))
}

fn render_time(geometry: Geometry, art: &str) -> Vec<DrawCommand> {
    let mut lines: Vec<&str> = art.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Vec::new();
    }

    let inner = geometry.inner_width();
    let lines: Vec<String> = lines.iter().map(|line| clip(line, inner)).collect();
    let block_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let col = geometry
        .left
        .saturating_add(1)
        .saturating_add(to_cells((inner - block_width) / 2));

    // Keep clear of the date row and the weather row.
    let first_row = geometry.top.saturating_add(2);
    let last_row = geometry.bottom().saturating_sub(3);
    let centered = geometry
        .top
        .saturating_add(to_cells(usize::from(geometry.height).saturating_sub(lines.len()) / 2));
    let start = centered.max(first_row);

    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let row = start.saturating_add(to_cells(i));
            (row <= last_row).then(|| {
                DrawCommand::text(col, row, line.clone(), gradient(i, lines.len()))
            })
        })
        .collect()
}

fn render_weather(geometry: Geometry, line: &WeatherLine) -> Vec<DrawCommand> {
    if geometry.height < 4 {
        return Vec::new();
    }
    let row = geometry.top.saturating_add(geometry.height - 3);
    let mut col = geometry.left.saturating_add(2);
    let mut budget = geometry.inner_width().saturating_sub(1);

    let mut cmds = Vec::new();
    for (text, tone) in weather_segments(line) {
        let text = clip(&text, budget);
        if text.is_empty() {
            break;
        }
        let width = text.chars().count();
        cmds.push(DrawCommand::text(col, row, text, tone));
        col = col.saturating_add(to_cells(width));
        budget -= width;
    }
    cmds
}

fn weather_segments(line: &WeatherLine) -> Vec<(String, Tone)> {
    match (line.status, &line.summary) {
        (Status::Complete, Some(summary)) => {
            let unit = &summary.unit;
            vec![
                (format!("{}°{unit}", summary.temperature), Tone::Temperature),
                (" and ".to_string(), Tone::Plain),
                (summary.condition.clone(), Tone::Condition),
                (" (".to_string(), Tone::Plain),
                (format!("{}°{unit}", summary.low), Tone::Low),
                (" → ".to_string(), Tone::Plain),
                (format!("{}°{unit}", summary.high), Tone::High),
                (")".to_string(), Tone::Plain),
            ]
        }
        (Status::Error, _) => vec![(line.text.clone(), Tone::Error)],
        _ => vec![(line.text.clone(), Tone::Plain)],
    }
}

fn gradient(step: usize, steps: usize) -> Tone {
    let position = if steps <= 1 {
        0.0
    } else {
        step as f32 / (steps - 1) as f32 * (ATLAS.len() - 1) as f32
    };
    let segment = (position.floor() as usize).min(ATLAS.len() - 2);
    let t = position - segment as f32;
    let (from, to) = (ATLAS[segment], ATLAS[segment + 1]);
    Tone::Rgb {
        r: lerp(from.0, to.0, t),
        g: lerp(from.1, to.1, t),
        b: lerp(from.2, to.2, t),
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn width_of(text: &str) -> u16 {
    to_cells(text.chars().count())
}

fn to_cells(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use today_core::{CurrentConditions, DayForecast, Location, RequestState, WeatherResult};

    use super::*;

    struct EchoArt;

    impl AsciiArt for EchoArt {
        fn render(&self, text: &str, style: &str) -> String {
            format!("{text}\n[{style}]\n\n")
        }
    }

    fn view(weather: WeatherLine) -> TodayViewModel {
        TodayViewModel {
            date: "October 17, 2026".to_string(),
            time: "09:05 AM".to_string(),
            font: "Straight",
            weather,
        }
    }

    fn line(state: RequestState<Vec<WeatherResult>, String>) -> WeatherLine {
        WeatherLine::from_request(&state)
    }

    fn loading() -> WeatherLine {
        line(RequestState::Loading)
    }

    fn sunny() -> WeatherLine {
        line(RequestState::Complete(vec![WeatherResult {
            location: Location {
                name: "Nashville, TN".to_string(),
                degreetype: "F".to_string(),
            },
            current: CurrentConditions {
                temperature: "72".to_string(),
                skytext: "Sunny".to_string(),
            },
            forecast: vec![
                DayForecast {
                    low: "58".to_string(),
                    high: "77".to_string(),
                },
                DayForecast {
                    low: "60".to_string(),
                    high: "80".to_string(),
                },
            ],
        }]))
    }

    fn row_spans(cmds: &[DrawCommand], wanted: u16) -> Vec<(u16, String, Tone)> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    col,
                    row,
                    content,
                    tone,
                } if *row == wanted && *tone != Tone::Border => {
                    Some((*col, content.clone(), *tone))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn weather_line_is_colored_by_segment() {
        let geometry = Geometry::default();
        let cmds = render(geometry, &view(sunny()), &EchoArt);

        let spans = row_spans(&cmds, 11);
        let text: String = spans.iter().map(|(_, text, _)| text.as_str()).collect();
        assert_eq!(text, "72°F and Sunny (60°F → 80°F)");
        assert_eq!(spans[0], (2, "72°F".to_string(), Tone::Temperature));
        assert_eq!(spans[2].2, Tone::Condition);
        assert_eq!(spans[4].2, Tone::Low);
        assert_eq!(spans[6].2, Tone::High);
    }

    #[test]
    fn date_is_right_aligned_inside_border() {
        let geometry = Geometry {
            top: 2,
            left: 10,
            ..Geometry::default()
        };
        let cmds = render(geometry, &view(loading()), &EchoArt);

        assert_eq!(
            row_spans(&cmds, 3),
            vec![(52, "October 17, 2026".to_string(), Tone::Date)]
        );
    }

    #[test]
    fn time_art_is_centered_with_gradient_and_trailing_blank_lines_dropped() {
        let cmds = render(Geometry::default(), &view(loading()), &EchoArt);

        let first = row_spans(&cmds, 6);
        let second = row_spans(&cmds, 7);
        assert_eq!(first, vec![(25, "09:05 AM".to_string(), gradient(0, 2))]);
        assert_eq!(second[0].1, "[Straight]");
        assert_eq!(second[0].2, Tone::Rgb { r: 0x4b, g: 0xc0, b: 0xc8 });
        assert!(row_spans(&cmds, 8).is_empty());
    }

    #[test]
    fn narrow_box_clips_every_text() {
        let geometry = Geometry {
            width: 12,
            ..Geometry::default()
        };
        let cmds = render(geometry, &view(sunny()), &EchoArt);

        let weather: String = row_spans(&cmds, 11)
            .iter()
            .map(|(_, text, _)| text.as_str())
            .collect();
        assert_eq!(weather, "72°F and ");
        assert_eq!(row_spans(&cmds, 1)[0].1, "October 1");
    }

    #[test]
    fn errors_render_in_error_tone() {
        let cmds = render(
            Geometry::default(),
            &view(line(RequestState::Error("network down".to_string()))),
            &EchoArt,
        );
        assert_eq!(
            row_spans(&cmds, 11),
            vec![(2, "Error: network down".to_string(), Tone::Error)]
        );
    }

    #[test]
    fn box_near_the_edge_of_the_cell_range_does_not_overflow() {
        let geometry = Geometry {
            top: 65530,
            left: 65500,
            width: 60,
            height: 14,
        };
        let cmds = render(geometry, &view(sunny()), &EchoArt);

        assert!(!cmds.is_empty());
        assert_eq!(row_spans(&cmds, 65531)[0].1, "October 17, 2026");
        assert!(cmds.iter().all(|cmd| cmd.row() >= 65530));
    }

    #[test]
    fn gradient_hits_atlas_stops() {
        assert_eq!(gradient(0, 3), Tone::Rgb { r: 0xfe, g: 0xac, b: 0x5e });
        assert_eq!(gradient(1, 3), Tone::Rgb { r: 0xc7, g: 0x79, b: 0xd0 });
        assert_eq!(gradient(2, 3), Tone::Rgb { r: 0x4b, g: 0xc0, b: 0xc8 });
    }
}
