use chrono::NaiveDateTime;
use proclog::system::collector::Collector;
use proclog::system::sample::TIMESTAMP_FORMAT;

#[test]
fn capture_sees_the_current_process() {
    let mut collector = Collector::new();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    let batch = collector.capture();

    let me = std::process::id();
    let sample = batch
        .samples
        .iter()
        .find(|s| s.pid == me)
        .expect("current process missing from batch");
    assert!(sample.threads >= 1);
    assert!(!sample.name.is_empty());
}

#[test]
fn enumeration_order_is_ascending_pid() {
    let mut collector = Collector::new();
    let batch = collector.capture();
    assert!(batch.samples.len() > 1);
    assert!(batch.samples.windows(2).all(|w| w[0].pid < w[1].pid));
}

#[test]
fn timestamp_uses_the_fixed_layout() {
    let mut collector = Collector::new();
    let batch = collector.capture();
    assert!(NaiveDateTime::parse_from_str(&batch.timestamp, TIMESTAMP_FORMAT).is_ok());
}
