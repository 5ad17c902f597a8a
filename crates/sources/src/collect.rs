//! Assembly of the per-panel data payloads from a metrics provider

use sense_panel_core::{MetricQuery, MetricsProvider};
use sense_panel_types::{
    ParamKind, PowerConfig, PowerReadings, PowerWindow, Reading, RoomConfig, RoomReading,
    SensorConfig,
};

/// Query for one room parameter
pub fn room_query(sensor: &SensorConfig, room: &RoomConfig, param: ParamKind) -> MetricQuery {
    MetricQuery::new(
        &room.host.kind,
        &room.host.name,
        param.name(),
        sensor.lookback_min,
        sensor.window_min,
    )
}

/// Query for the power meter averaged over `window`
pub fn power_query(power: &PowerConfig, window: PowerWindow) -> MetricQuery {
    MetricQuery::new(
        &power.host.kind,
        &power.host.name,
        power.param.name.name(),
        power.lookback_min,
        window.minutes(),
    )
}

/// Latest readings of every configured room, in configuration order.
///
/// Parameters the room's host kind cannot measure are `Unsupported` and are
/// not queried; a query that yields nothing is `Missing`.
pub fn collect_rooms(sensor: &SensorConfig, provider: &dyn MetricsProvider) -> Vec<RoomReading> {
    log::info!("fetch sensor data");

    let rooms: Vec<RoomReading> = sensor
        .room_list
        .iter()
        .map(|room| {
            let mut reading = RoomReading::empty(&room.label);
            for param in ParamKind::ROOM {
                let value = if sensor.supports(&room.host.kind, param) {
                    Reading::from_option(provider.fetch(&room_query(sensor, room, param)))
                } else {
                    Reading::Unsupported
                };
                reading.set(param, value);
            }
            reading
        })
        .collect();

    log::debug!("data = {:?}", rooms);
    rooms
}

/// Power readings for all windows, with the 3-minute fallback applied
pub fn collect_power(power: &PowerConfig, provider: &dyn MetricsProvider) -> PowerReadings {
    log::info!("fetch power data");

    let mut readings = PowerReadings::default();
    for window in PowerWindow::ALL {
        readings.set(window, provider.fetch(&power_query(power, window)));
    }
    let readings = readings.with_fallback();

    log::debug!("data = {:?}", readings);
    readings
}
