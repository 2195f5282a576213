/*
[INPUT]:  Parsed subcommand, authenticated WebexClient
[OUTPUT]: JSON value of the API result
[POS]:    Command layer - maps subcommands onto SDK calls
[UPDATE]: When adding subcommands
*/

use anyhow::{Context, Result, bail};
use futures_util::{StreamExt, TryStreamExt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use webex_sdk::{
    CreateMessage, ItemStream, ListDevicesParams, ListMessagesParams, ListNumbersParams,
    ListPeopleParams, ListRecordingsParams, ListRoomsParams, ListWorkspacesParams, WebexClient,
};

use crate::cli::{
    Command, DevicesCommand, MessagesCommand, NumbersCommand, PeopleCommand, RecordingsCommand,
    RoomsCommand, SendMessageArgs, TrackingCodesCommand, WorkspacesCommand,
};

/// Options shared by list commands
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub max: Option<u32>,
    pub org_id: Option<String>,
}

pub async fn execute(
    client: &WebexClient,
    command: &Command,
    options: &ListOptions,
) -> Result<Value> {
    let max = options.max;
    let org_id = options.org_id.clone();

    match command {
        Command::Me => to_value(&client.people().me().await?),
        Command::People(PeopleCommand::List {
            email,
            display_name,
        }) => {
            let params = ListPeopleParams {
                email: email.clone(),
                display_name: display_name.clone(),
                org_id,
                max,
                ..ListPeopleParams::default()
            };
            collect(client.people().list(&params)?, max).await
        }
        Command::Rooms(RoomsCommand::List { team_id }) => {
            let params = ListRoomsParams {
                team_id: team_id.clone(),
                max,
                ..ListRoomsParams::default()
            };
            collect(client.rooms().list(&params)?, max).await
        }
        Command::Messages(MessagesCommand::List { room_id }) => {
            let params = ListMessagesParams {
                room_id: room_id.clone(),
                max,
                ..ListMessagesParams::default()
            };
            collect(client.messages().list(&params)?, max).await
        }
        Command::Messages(MessagesCommand::Send(args)) => {
            let message = build_message(args)?;
            to_value(&client.messages().create(&message).await?)
        }
        Command::Devices(DevicesCommand::List { workspace_id }) => {
            let params = ListDevicesParams {
                workspace_id: workspace_id.clone(),
                org_id,
                max,
                ..ListDevicesParams::default()
            };
            collect(client.devices().list(&params)?, max).await
        }
        Command::Workspaces(WorkspacesCommand::List { display_name }) => {
            let params = ListWorkspacesParams {
                display_name: display_name.clone(),
                org_id,
                max,
                ..ListWorkspacesParams::default()
            };
            collect(client.workspaces().list(&params)?, max).await
        }
        Command::Recordings(RecordingsCommand::List { host_email }) => {
            let params = ListRecordingsParams {
                host_email: host_email.clone(),
                max,
                ..ListRecordingsParams::default()
            };
            collect(client.recordings().list(&params)?, max).await
        }
        Command::TrackingCodes(TrackingCodesCommand::List { site_url }) => {
            let mut codes = client.tracking_codes().list(site_url).await?;
            if let Some(max) = max {
                codes.truncate(max as usize);
            }
            to_value(&codes)
        }
        Command::Numbers(NumbersCommand::List { location_id }) => {
            let params = ListNumbersParams {
                location_id: location_id.clone(),
                org_id,
                max,
                ..ListNumbersParams::default()
            };
            collect(client.telephony().numbers(&params)?, max).await
        }
    }
}

fn build_message(args: &SendMessageArgs) -> Result<CreateMessage> {
    if args.text.is_none() && args.markdown.is_none() {
        bail!("message needs --text or --markdown");
    }
    Ok(CreateMessage {
        room_id: args.room_id.clone(),
        to_person_email: args.to_person_email.clone(),
        text: args.text.clone(),
        markdown: args.markdown.clone(),
        ..CreateMessage::default()
    })
}

async fn collect<T: Serialize>(stream: ItemStream<T>, max: Option<u32>) -> Result<Value> {
    let items: Vec<T> = match max {
        Some(max) => stream.take(max as usize).try_collect().await?,
        None => stream.try_collect().await?,
    };
    debug!(count = items.len(), "list complete");
    to_value(&items)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("encode result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_ok;
    use webex_sdk::ClientConfig;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WebexClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        WebexClient::with_config(config, "cli-token").expect("client init")
    }

    fn room_json(id: &str) -> Value {
        json!({"id": id, "title": format!("Room {id}"), "type": "group"})
    }

    #[tokio::test]
    async fn test_list_stops_at_max_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .and(query_param("max", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [room_json("r1"), room_json("r2")]}))
                    .insert_header("link", "</rooms?cursor=next>; rel=\"next\""),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let options = ListOptions {
            max: Some(2),
            org_id: None,
        };
        let command = Command::Rooms(RoomsCommand::List { team_id: None });
        let value = assert_ok!(execute(&client, &command, &options).await);

        let rooms = value.as_array().expect("array output");
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1]["id"], "r2");
    }

    #[tokio::test]
    async fn test_send_message_to_person() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(body_partial_json(json!({
                "toPersonEmail": "alice@example.com",
                "markdown": "**hi**"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "m1",
                "roomId": "r1",
                "roomType": "direct",
                "markdown": "**hi**",
                "created": "2024-01-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let command = Command::Messages(MessagesCommand::Send(SendMessageArgs {
            room_id: None,
            to_person_email: Some("alice@example.com".to_string()),
            text: None,
            markdown: Some("**hi**".to_string()),
        }));
        let value = assert_ok!(execute(&client, &command, &ListOptions::default()).await);
        assert_eq!(value["id"], "m1");
    }

    #[test]
    fn test_message_without_body_rejected() {
        let args = SendMessageArgs {
            room_id: Some("r1".to_string()),
            to_person_email: None,
            text: None,
            markdown: None,
        };
        assert!(build_message(&args).is_err());
    }
}
