use driftline::{Canvas, Engine, FrameInput, Scene, Vec2};

fn build_scene() -> Scene {
    let mut scene = Scene::with_poem(
        [
            "the tide keeps",
            "what the shore",
            "cannot hold",
            "a gull writes",
            "its one word",
            "across the gray",
            "and the water",
            "reads it back",
        ]
        .map(String::from)
        .to_vec(),
    );
    scene.canvas = Canvas {
        width: 800,
        height: 800,
    };
    scene.seed = 7;
    // Fast cycle so the demo shows a full transition in a few seconds of frames.
    scene.cycle.dwell_frames = 90;
    scene
}

fn parse_frames() -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(240)
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let scene = build_scene();
    scene.validate()?;
    let mut engine = Engine::new(scene)?;

    let frames = parse_frames();
    let mut last = None;
    for frame in 0..frames {
        // Drift the pointer in a slow circle so the curves visibly sway.
        let angle = frame as f64 * 0.01;
        let input = FrameInput {
            pointer: Vec2::new(0.5 * angle.cos(), 0.5 * angle.sin()),
            advance_requested: false,
        };
        let snapshot = engine.tick(input);
        if frame % 60 == 0 {
            let visible: usize = snapshot.letters.iter().map(Vec::len).sum();
            eprintln!(
                "frame {:>4}  segment {}  preview {:?}  visible letters {}",
                frame, snapshot.segment_start, snapshot.preview, visible
            );
        }
        last = Some(snapshot);
    }

    // Dump the final frame as JSON for inspection or piping into a renderer.
    let last = last.expect("at least one frame");
    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}
