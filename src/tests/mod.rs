mod stubs;
mod prefix_carrier_mapper_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}
