use std::time::Duration;

use ezto_core::classifier::StatusColor;
use ezto_core::imu::{Axes3, Sample};
use ezto_core::telemetry::{NodeIdentity, ResourceMetrics, TelemetrySnapshot};
use ezto_node::communication::telemetry::{DocumentStore, StoreError};
use ezto_sim::{RtdbStore, SimError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// One captured request: head and body.
struct Captured {
    head: String,
    body: String,
}

/// Answer every connection with `status` and forward what was received.
async fn fake_rtdb(status: &'static str) -> (String, mpsc::UnboundedReceiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let mut data = Vec::new();
            let mut buf = [0u8; 1024];
            let (head, body_len) = loop {
                let n = socket.read(&mut buf).await.unwrap();
                data.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&data).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let head = text[..end].to_string();
                    let len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("Content-Length: "))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    break (head, end + 4 + len);
                }
            };
            while data.len() < body_len {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                data.extend_from_slice(&buf[..n]);
            }
            let body = String::from_utf8_lossy(&data[head.len() + 4..]).to_string();

            let response = format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = tx.send(Captured { head, body });
        }
    });

    (url, rx)
}

fn snapshot(unix_time_ms: u64) -> TelemetrySnapshot<'static> {
    TelemetrySnapshot::new(
        NodeIdentity {
            device_id: "esp32-pulsera-01",
            location: "pulsera mano derecha",
        },
        Sample {
            accel: Axes3::new(0.98765, -0.1234, 0.5),
            gyro: Axes3::new(12.345, 0.0, -3.0),
            temperature_c: 27.46,
        },
        StatusColor::Yellow,
        true,
        ResourceMetrics {
            link_quality: -61,
            free_memory: 98_304,
        },
        unix_time_ms,
    )
}

#[tokio::test]
async fn upsert_puts_document_under_key() {
    let (url, mut rx) = fake_rtdb("200 OK").await;
    let mut store = RtdbStore::new(&url, "s3cr3t").unwrap();

    // 2024-03-09T12:34:56Z
    let snap = snapshot(1_709_987_696_450);
    let key = snap.document_key().unwrap();
    store
        .upsert("lecturas_iot", key.as_str(), &snap.to_document())
        .await
        .unwrap();

    let req = rx.recv().await.unwrap();
    let request_line = req.head.lines().next().unwrap();
    assert_eq!(
        request_line,
        "PUT /lecturas_iot/2024-03-09T12:34:56Z_esp32-pulsera-01.json?auth=s3cr3t HTTP/1.1"
    );
    assert!(req.head.contains("Content-Type: application/json"));

    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["device_id"], "esp32-pulsera-01");
    assert_eq!(body["lecturas"]["led_color"], "amarillo");
    assert_eq!(body["lecturas"]["accelerometer"]["x"], 0.988);
    assert_eq!(body["lecturas"]["gyroscope"]["x"], 12.35);
    assert_eq!(body["lecturas"]["mpu_temp"], 27.5);
    assert_eq!(body["lecturas"]["wifi_rssi"], -61);
}

#[tokio::test]
async fn non_success_status_is_rejected() {
    let (url, _rx) = fake_rtdb("401 Unauthorized").await;
    let mut store = RtdbStore::new(&url, "wrong").unwrap();
    let snap = snapshot(1_709_987_696_000);

    let result = store
        .upsert("lecturas_iot", "k", &snap.to_document())
        .await;

    assert_eq!(result, Err(StoreError::Rejected(401)));
}

#[tokio::test]
async fn unreachable_store_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut store = RtdbStore::new(&format!("http://127.0.0.1:{port}"), "s").unwrap();
    let snap = snapshot(1_709_987_696_000);

    let result = store
        .upsert("lecturas_iot", "k", &snap.to_document())
        .await;

    assert_eq!(result, Err(StoreError::Transport));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        // Accept and hold the connection without answering
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let store = RtdbStore::new(&url, "s")
        .unwrap()
        .with_io_timeout(Duration::from_millis(100));
    let result = store.put_json("lecturas_iot", "k", b"{}").await;

    assert!(matches!(result, Err(SimError::Timeout(_))));
}
