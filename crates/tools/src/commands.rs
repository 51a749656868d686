use anyhow::{Context, Result, bail};
use content::{
    AboutContent, Achievement, ContentKind, ContentRecord, ContentSource, FallbackPolicy,
    FooterContent, HeroContent, LocationRecord, SiteContent, fetch_all, fetch_one,
};
use gallery::backfill::{BackfillReport, backfill};
use journey::{GlobeCommand, JourneyTour, RecordingRenderer, TourConfig};
use serde::Serialize;

/// Media items as stored on disk: a bare array.
pub fn backfill_json(raw: &str) -> Result<(Vec<ContentRecord>, BackfillReport)> {
    let mut records: Vec<ContentRecord> =
        serde_json::from_str(raw).context("media items must be a JSON array of records")?;
    let report = backfill(&mut records);
    Ok((records, report))
}

/// One step of a tour preview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourFrame {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub year: String,
    pub commands: Vec<GlobeCommand>,
}

/// Start the tour and step forward to the end, capturing what the globe receives.
pub fn tour_frames(records: Vec<LocationRecord>, config: TourConfig) -> Result<Vec<TourFrame>> {
    let mut tour = JourneyTour::new(records, RecordingRenderer::new(), config)?;
    let mut frames = Vec::new();
    tour.start();
    loop {
        let current = tour.current();
        frames.push(TourFrame {
            index: tour.navigator().state().index(),
            id: current.id.clone(),
            title: current.title.clone(),
            year: current.year.clone(),
            commands: tour.renderer_mut().drain(),
        });
        if !tour.next() {
            break;
        }
    }
    Ok(frames)
}

pub fn render_tour_text(frames: &[TourFrame]) -> String {
    let mut out = String::new();
    let total = frames.len();
    for frame in frames {
        out.push_str(&format!(
            "[{}/{}] {} ({}) {}\n",
            frame.index + 1,
            total,
            frame.title,
            frame.year,
            frame.id
        ));
        for command in &frame.commands {
            let line = match command {
                GlobeCommand::SetVisiblePoints(points) => {
                    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
                    format!("points  {}", labels.join(" > "))
                }
                GlobeCommand::SetArcs(arcs) => {
                    let arcs: Vec<String> = arcs
                        .iter()
                        .map(|a| format!("{:.0}km@{}", a.distance_km, a.arc_altitude))
                        .collect();
                    format!("arcs    {}", arcs.join(" "))
                }
                GlobeCommand::Retarget(camera) => format!(
                    "camera  ({:.4}, {:.4}) alt {} over {}ms",
                    camera.position.lat, camera.position.lng, camera.altitude, camera.duration_ms
                ),
                GlobeCommand::SetControlMode(mode) => format!(
                    "control auto-rotate {} input {}",
                    on_off(mode.auto_rotate),
                    on_off(mode.input_enabled)
                ),
            };
            out.push_str("    ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Fetch and decode a single content kind.
pub async fn fetch_kind<S>(source: &S, kind: ContentKind) -> Result<serde_json::Value>
where
    S: ContentSource + ?Sized,
{
    let value = match kind {
        ContentKind::Hero => to_value(fetch_one::<HeroContent, _>(source).await?)?,
        ContentKind::About => to_value(fetch_one::<AboutContent, _>(source).await?)?,
        ContentKind::Footer => to_value(fetch_one::<FooterContent, _>(source).await?)?,
        ContentKind::JourneyPoint => to_value(fetch_all::<LocationRecord, _>(source).await?)?,
        ContentKind::Achievements => to_value(fetch_all::<Achievement, _>(source).await?)?,
        ContentKind::MediaItem => to_value(fetch_all::<ContentRecord, _>(source).await?)?,
    };
    if value.is_null() {
        bail!("no {kind} entry is published");
    }
    Ok(value)
}

/// Load every section the way the site does, fallbacks included.
pub async fn load_site<S>(source: &S, policy: FallbackPolicy) -> Result<serde_json::Value>
where
    S: ContentSource + ?Sized,
{
    to_value(SiteContent::load(source, policy).await)
}

fn to_value(value: impl Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(value).context("serialize output")
}
