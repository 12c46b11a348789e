mod helpers;

use helpers::{EnvGuard, run_cli};
use pokersim_cli::logging::CaptureLog;
use serial_test::serial;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
#[serial]
fn sim_emits_one_settled_event_per_hand() {
    let _env = EnvGuard::clean();
    let log = CaptureLog::new();
    let registry = Registry::default().with(log.clone().into_layer::<Registry>());

    let res = tracing::subscriber::with_default(registry, || {
        run_cli(&["sim", "--hands", "3", "--seed", "21", "--players", "4"])
    });
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let settled = log.find("hand settled");
    assert_eq!(settled.len(), 3);
    for e in &settled {
        assert_eq!(e.level, Level::INFO);
        assert_eq!(e.target, "pokersim_engine::engine");
        assert!(e.field("winners").is_some());
        assert!(e.field("pot").is_some());
    }
    assert_eq!(log.find("simulation started").len(), 1);
}

#[test]
#[serial]
fn interruption_is_logged_as_a_warning() {
    let _env = EnvGuard::apply(&[("POKERSIM_SIM_BREAK_AFTER", "1")]);
    let log = CaptureLog::new();
    let registry = Registry::default().with(log.clone().into_layer::<Registry>());

    let res = tracing::subscriber::with_default(registry, || {
        run_cli(&["sim", "--hands", "2", "--seed", "2"])
    });
    assert_eq!(res.exit_code, 130);
    assert!(log.entries().iter().any(|e| e.level == Level::WARN && e.message.contains("saved 1/2")));
}
