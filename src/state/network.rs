use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, info};
use stadium_api::client::{ApiError, StadiumApi};
use tokio::sync::mpsc;

pub struct NetworkWorker {
    client: StadiumApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        client: StadiumApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self { client, requests, responses }
    }

    /// Serve requests until either channel closes. One request, one fetch, one response.
    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let result = match request {
                NetworkRequest::LoadStructure => self.handle_load_structure().await,
            };

            debug!("network request complete");
            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_structure(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading stadium structure from {}", self.client.base_url());
        let structure = self.client.fetch_structure().await?;
        if let Some(s) = &structure {
            info!("loaded {} zones, {} seats", s.zonas.len(), s.seat_count());
            for zone in &s.zonas {
                debug!("zone {}: {:?}", zone.nombre, zone.state_counts());
            }
        }
        Ok(NetworkResponse::StructureLoaded { structure })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn serve_once(status: usize, body: &str) -> (mockito::ServerGuard, NetworkResponse) {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/get_stadium_structure")
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let (req_tx, req_rx) = mpsc::channel(1);
        let (resp_tx, mut resp_rx) = mpsc::channel(1);
        let worker = NetworkWorker::new(StadiumApi::with_base_url(server.url()), req_rx, resp_tx);
        let task = tokio::spawn(worker.run());

        req_tx.send(NetworkRequest::LoadStructure).await.unwrap();
        let response = resp_rx.recv().await.unwrap();
        drop(req_tx);
        task.await.unwrap();
        (server, response)
    }

    #[tokio::test]
    async fn success_is_forwarded_as_loaded_structure() {
        let (_server, response) =
            serve_once(200, r#"{"zonas":[{"nombre":"D","categorias":{}}]}"#).await;
        let s = match response {
            NetworkResponse::StructureLoaded { structure: Some(s) } => s,
            other => panic!("unexpected response: {other:?}"),
        };
        assert_eq!(s.zonas[0].nombre, "D");
    }

    #[tokio::test]
    async fn failure_is_forwarded_as_error_message() {
        let (_server, response) = serve_once(500, "boom").await;
        assert_eq!(
            response,
            NetworkResponse::Error { message: "Error en la solicitud: 500".to_string() }
        );
    }

    #[tokio::test]
    async fn worker_stops_when_requests_close() {
        let (req_tx, req_rx) = mpsc::channel::<NetworkRequest>(1);
        let (resp_tx, _resp_rx) = mpsc::channel(1);
        let worker = NetworkWorker::new(StadiumApi::new(), req_rx, resp_tx);
        drop(req_tx);
        worker.run().await;
    }
}
