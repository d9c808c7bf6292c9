use std::path::PathBuf;
use std::process::ExitCode;

use bus::{Bus, HostEvent, PageKind};
use clap::Parser;
use dom::serialize::to_html;
use mimalloc::MiMalloc;
use sections::{Controller, HostServices, PageState, Phase};

mod scene;

use scene::Scene;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Rebuild a forum category-index snapshot into configured sections and
/// print the result.
#[derive(Debug, Parser)]
#[command(name = "sectioner")]
struct Args {
    /// Scene file: site settings, section config, category fixtures.
    scene: PathBuf,

    /// After the first build, switch the i18n locale to this tag and replay
    /// a locale-change notification.
    #[arg(long, value_name = "TAG")]
    switch_locale: Option<String>,

    /// Also print the page as the forum rendered it, before any rebuild.
    #[arg(long)]
    show_before: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sectioner: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.scene)?;
    let scene: Scene = toml::from_str(&text)?;

    let mut page = scene.build_page();
    let mut host = scene.host_services();
    let mut controller = Controller::new(scene.config.clone());
    let bus = Bus::new();

    if args.show_before {
        println!("-- before --");
        print!("{}", to_html(page.root()));
    }

    bus.evt_tx.send(HostEvent::PageChanged {
        page: PageKind::CategoryIndex,
    })?;
    bus.evt_tx.send(HostEvent::RenderSettled)?;
    drain(&bus, &mut controller, &mut page, &host);

    println!("-- after ({}) --", phase_label(controller.phase()));
    print!("{}", to_html(page.root()));

    if let Some(tag) = &args.switch_locale {
        host.i18n_locale = Some(tag.clone());
        bus.evt_tx.send(HostEvent::LocaleChanged)?;
        bus.evt_tx.send(HostEvent::RenderSettled)?;
        drain(&bus, &mut controller, &mut page, &host);

        println!("-- after locale switch to {tag} --");
        print!("{}", to_html(page.root()));
    }

    Ok(())
}

fn drain(bus: &Bus, controller: &mut Controller, page: &mut PageState, host: &HostServices) {
    while let Ok(event) = bus.evt_rx.try_recv() {
        controller.handle(&event, page, host);
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Loading => "loading",
        Phase::Built => "built",
    }
}
