//! Broker session - connects, subscribes, and dispatches inbound messages.
//!
//! One session at a time: resolve the broker, open a TCP socket, run the
//! MQTT client over it, and feed decoded commands to the rest of the
//! bridge. Any failure tears the session down, darkens the indicator, and
//! retries after a fixed backoff.

use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_net::dns::DnsQueryType;
use embassy_net::tcp::TcpSocket;
use embassy_net::{IpAddress, Stack};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use rust_mqtt::client::client::MqttClient;
use rust_mqtt::client::client_config::{ClientConfig, MqttVersion};
use rust_mqtt::packet::v5::publish_packet::QualityOfService;
use rust_mqtt::packet::v5::reason_codes::ReasonCode;
use rust_mqtt::utils::rng_generator::CountingRng;

use crate::command::{Command, KeystrokePayload};
use crate::config;
use crate::error::{Error, NetError};
use crate::led;
use crate::status;

/// Sending half of the command queue feeding the typist task.
pub type CommandSender =
    Sender<'static, CriticalSectionRawMutex, KeystrokePayload, { config::COMMAND_QUEUE_DEPTH }>;

/// Broker session task: connect, dispatch, back off, repeat.
#[embassy_executor::task]
pub async fn mqtt_task(stack: Stack<'static>, commands: CommandSender) -> ! {
    loop {
        if let Err(e) = run_session(stack, &commands).await {
            warn!("broker session ended: {}", e);
        }
        led::set_indicator(status::indicator_should_be_on(false, None));
        Timer::after(Duration::from_secs(config::MQTT_RECONNECT_DELAY_SECS)).await;
    }
}

async fn run_session(stack: Stack<'static>, commands: &CommandSender) -> Result<(), Error> {
    let addr = resolve_broker(stack).await?;

    let mut rx_buffer = [0u8; config::MQTT_BUF_SIZE];
    let mut tx_buffer = [0u8; config::MQTT_BUF_SIZE];
    let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
    socket.set_timeout(Some(Duration::from_secs(
        config::MQTT_KEEP_ALIVE_SECS as u64 * 2,
    )));

    socket
        .connect((addr, config::MQTT_BROKER_PORT))
        .await
        .map_err(|_| NetError::ConnectFailed)?;
    info!(
        "TCP connection to {}:{} established",
        config::MQTT_BROKER_HOST,
        config::MQTT_BROKER_PORT
    );

    let mut mqtt_config: ClientConfig<'_, 5, _> =
        ClientConfig::new(MqttVersion::MQTTv5, CountingRng(20000));
    mqtt_config.add_client_id(config::MQTT_CLIENT_ID);
    mqtt_config.add_max_subscribe_qos(QualityOfService::QoS0);
    mqtt_config.max_packet_size = config::MQTT_BUF_SIZE as u32;
    mqtt_config.keep_alive = config::MQTT_KEEP_ALIVE_SECS;
    if !config::MQTT_USERNAME.is_empty() {
        mqtt_config.add_username(config::MQTT_USERNAME);
        mqtt_config.add_password(config::MQTT_PASSWORD);
    }

    let mut write_buffer = [0u8; config::MQTT_BUF_SIZE];
    let mut recv_buffer = [0u8; config::MQTT_BUF_SIZE];
    let mut client = MqttClient::<_, 5, _>::new(
        socket,
        &mut write_buffer,
        config::MQTT_BUF_SIZE,
        &mut recv_buffer,
        config::MQTT_BUF_SIZE,
        mqtt_config,
    );

    client.connect_to_broker().await.map_err(broker_err)?;

    // Session is up: subscribe and light the indicator.
    client
        .subscribe_to_topic(config::MQTT_TOPIC_KEYSTROKES)
        .await
        .map_err(broker_err)?;
    client
        .subscribe_to_topic(config::MQTT_TOPIC_INDICATOR)
        .await
        .map_err(broker_err)?;
    led::set_indicator(status::indicator_should_be_on(true, None));
    info!(
        "broker session up, subscribed to {} and {}",
        config::MQTT_TOPIC_KEYSTROKES,
        config::MQTT_TOPIC_INDICATOR
    );

    // An indicator override lasts for the rest of this session.
    let mut manual_override: Option<bool> = None;
    let ping_interval = Duration::from_secs(config::MQTT_KEEP_ALIVE_SECS as u64 / 2);

    loop {
        match select(client.receive_message(), Timer::after(ping_interval)).await {
            Either::First(Ok((topic, payload))) => {
                handle_message(commands, &mut manual_override, topic, payload);
            }
            Either::First(Err(rc)) => return Err(broker_err(rc)),
            Either::Second(()) => client.send_ping().await.map_err(broker_err)?,
        }
    }
}

/// Decode one publish and route it. Runs inside the receive loop, so it
/// must not block: a full command queue drops the message.
fn handle_message(
    commands: &CommandSender,
    manual_override: &mut Option<bool>,
    topic: &str,
    payload: &[u8],
) {
    match Command::parse(topic, payload) {
        Ok(Command::Type(text)) => {
            if commands.try_send(text).is_err() {
                warn!("command queue full, dropping keystroke payload");
            }
        }
        Ok(Command::SetIndicator(on)) => {
            *manual_override = Some(on);
            led::set_indicator(status::indicator_should_be_on(true, *manual_override));
        }
        Err(e) => warn!("rejected message on {}: {}", topic, e),
    }
}

async fn resolve_broker(stack: Stack<'static>) -> Result<IpAddress, NetError> {
    let addrs = stack
        .dns_query(config::MQTT_BROKER_HOST, DnsQueryType::A)
        .await
        .map_err(|_| NetError::DnsFailed)?;
    addrs.first().copied().ok_or(NetError::DnsFailed)
}

fn broker_err(rc: ReasonCode) -> NetError {
    NetError::Broker(rc as u8)
}
