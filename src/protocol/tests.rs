#[cfg(test)]
mod protocol_tests {
    mod header_tests {
        use crate::protocol::protocol::FDFS_PROTO_CMD_QUIT;
        use crate::protocol::structs::header::Header;

        #[test]
        fn test_header_layout() {
            let header = Header::new(0x0102, 11, 0);
            assert_eq!(header.to_bytes(), [0, 0, 0, 0, 0, 0, 0x01, 0x02, 11, 0]);
        }

        #[test]
        fn test_quit_header() {
            let header = Header::new(0, FDFS_PROTO_CMD_QUIT, 0);
            assert_eq!(header.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 0, 82, 0]);
        }

        #[test]
        fn test_header_from_short_buffer() {
            assert!(Header::from_bytes(&[0, 0, 0]).is_err());
        }

        #[test]
        fn test_header_parse() {
            let header = Header::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 40, 100, 2]).unwrap();
            assert_eq!(header, Header::new(40, 100, 2));
        }
    }

    mod field_tests {
        use crate::protocol::protocol::{pack_fixed, unpack_fixed, FDFS_GROUP_NAME_MAX_LEN};

        #[test]
        fn test_pack_fixed_pads() {
            let field = pack_fixed("group1", FDFS_GROUP_NAME_MAX_LEN);
            assert_eq!(field.len(), 16);
            assert_eq!(&field[..6], b"group1");
            assert!(field[6..].iter().all(|b| *b == 0));
        }

        #[test]
        fn test_pack_fixed_truncates() {
            assert_eq!(pack_fixed("tarball", 6), b"tarbal".to_vec());
        }

        #[test]
        fn test_unpack_fixed_stops_at_nul() {
            assert_eq!(unpack_fixed(b"txt\0\0\0"), "txt");
            assert_eq!(unpack_fixed(b"abcdef"), "abcdef");
            assert_eq!(unpack_fixed(b"\0\0"), "");
        }
    }

    mod storage_server_tests {
        use byteorder::{BigEndian, WriteBytesExt};
        use crate::protocol::errors::ProtocolError;
        use crate::protocol::protocol::{pack_fixed, TRACKER_QUERY_STORAGE_FETCH_BODY_LEN, TRACKER_QUERY_STORAGE_STORE_BODY_LEN};
        use crate::protocol::structs::storage_server::StorageServer;

        fn endpoint_body(group: &str, ip: &str, port: i64) -> Vec<u8> {
            let mut body = pack_fixed(group, 16);
            body.extend_from_slice(&pack_fixed(ip, 15));
            body.write_i64::<BigEndian>(port).unwrap();
            body
        }

        #[test]
        fn test_store_body() {
            let mut body = endpoint_body("group1", "192.168.0.10", 23000);
            body.push(3);
            assert_eq!(body.len(), TRACKER_QUERY_STORAGE_STORE_BODY_LEN);
            let server = StorageServer::from_store_body(&body).unwrap();
            assert_eq!(server, StorageServer {
                group_name: "group1".to_string(),
                ip_addr: "192.168.0.10".to_string(),
                port: 23000,
                store_path_index: 3,
            });
        }

        #[test]
        fn test_store_body_wrong_length() {
            let body = endpoint_body("group1", "192.168.0.10", 23000);
            let result = StorageServer::from_store_body(&body);
            assert!(matches!(result, Err(ProtocolError::InvalidBody { .. })));
        }

        #[test]
        fn test_fetch_body_ignores_extra_addresses() {
            let mut body = endpoint_body("group2", "10.0.0.7", 23001);
            assert_eq!(body.len(), TRACKER_QUERY_STORAGE_FETCH_BODY_LEN);
            body.extend_from_slice(&pack_fixed("10.0.0.8", 15));
            let server = StorageServer::from_fetch_body(&body, "query storage fetch").unwrap();
            assert_eq!(server.group_name, "group2");
            assert_eq!(server.ip_addr, "10.0.0.7");
            assert_eq!(server.port, 23001);
            assert_eq!(server.store_path_index, 0);
        }

        #[test]
        fn test_fetch_body_rejects_port_out_of_range() {
            let body = endpoint_body("group2", "10.0.0.7", 70000);
            let result = StorageServer::from_fetch_body(&body, "query storage fetch");
            assert!(matches!(result, Err(ProtocolError::InvalidBody { .. })));
        }
    }

    mod upload_file_response_tests {
        use serde_json::json;
        use crate::protocol::structs::upload_file_response::UploadFileResponse;

        #[test]
        fn test_json_output() {
            let uploaded = UploadFileResponse {
                group_name: "group1".to_string(),
                remote_file_id: "group1/M00/00/00/a.txt".to_string(),
            };
            assert_eq!(json!(uploaded), json!({ "group_name": "group1", "remote_file_id": "group1/M00/00/00/a.txt" }));
        }
    }

    mod framing_tests {
        use std::time::Duration;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use crate::protocol::errors::ProtocolError;
        use crate::protocol::protocol::{copy_exact, recv_body, recv_header, recv_package, send_request, with_timeout};
        use crate::protocol::structs::header::Header;

        #[tokio::test]
        async fn test_send_request_writes_header_and_body() {
            let (mut client, mut server) = tokio::io::duplex(64);
            send_request(&mut client, 12, b"abc").await.unwrap();
            let mut received = [0u8; 13];
            server.read_exact(&mut received).await.unwrap();
            assert_eq!(&received[..10], &Header::new(3, 12, 0).to_bytes());
            assert_eq!(&received[10..], b"abc");
        }

        #[tokio::test]
        async fn test_status_drains_body() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(&Header::new(4, 100, 2).to_bytes()).await.unwrap();
            server.write_all(b"junk").await.unwrap();
            server.write_all(&Header::new(2, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"ok").await.unwrap();

            let error = recv_header(&mut client, "download file").await.unwrap_err();
            assert_eq!(error.status(), Some(2));
            let body = recv_package(&mut client, "download file", None).await.unwrap();
            assert_eq!(body, b"ok");
        }

        #[tokio::test]
        async fn test_truncated_status_body_is_fatal() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(&Header::new(100, 100, 2).to_bytes()).await.unwrap();
            server.write_all(b"abc").await.unwrap();
            drop(server);

            let error = recv_header(&mut client, "download file").await.unwrap_err();
            assert!(matches!(&error, ProtocolError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof));
            assert!(error.is_connection_fatal());
        }

        #[tokio::test]
        async fn test_recv_body_does_not_trust_announced_length() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(b"abc").await.unwrap();
            drop(server);

            let error = recv_body(&mut client, (i64::MAX / 2) as usize).await.unwrap_err();
            assert!(matches!(&error, ProtocolError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof));
        }

        #[tokio::test]
        async fn test_unexpected_command() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(&Header::new(0, 11, 0).to_bytes()).await.unwrap();
            let error = recv_header(&mut client, "upload file").await.unwrap_err();
            assert!(matches!(error, ProtocolError::UnexpectedCommand { expected: 100, received: 11 }));
        }

        #[tokio::test]
        async fn test_package_length_mismatch() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(&Header::new(3, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"abc").await.unwrap();
            let error = recv_package(&mut client, "query storage store", Some(40)).await.unwrap_err();
            assert!(matches!(error, ProtocolError::InvalidBody { .. }));
        }

        #[tokio::test]
        async fn test_truncated_header_is_io_error() {
            let (mut client, mut server) = tokio::io::duplex(64);
            server.write_all(&[0, 0, 0]).await.unwrap();
            drop(server);
            let error = recv_header(&mut client, "delete file").await.unwrap_err();
            assert!(matches!(error, ProtocolError::Io(_)));
        }

        #[tokio::test]
        async fn test_timeout() {
            let (mut client, _server) = tokio::io::duplex(64);
            let result = with_timeout(Duration::from_millis(50), "active test", recv_header(&mut client, "active test")).await;
            assert!(matches!(result, Err(ProtocolError::Timeout { context: "active test", .. })));
        }

        #[tokio::test]
        async fn test_copy_exact_leaves_trailing_bytes() {
            let (mut client, mut server) = tokio::io::duplex(1024);
            server.write_all(b"0123456789").await.unwrap();
            let mut output = Vec::new();
            let copied = copy_exact(&mut client, &mut output, 6, Duration::from_secs(1), "download file").await.unwrap();
            assert_eq!(copied, 6);
            assert_eq!(output, b"012345");
            let mut rest = [0u8; 4];
            client.read_exact(&mut rest).await.unwrap();
            assert_eq!(&rest, b"6789");
        }

        #[tokio::test]
        async fn test_copy_exact_short_source() {
            let (mut client, mut server) = tokio::io::duplex(1024);
            server.write_all(b"0123").await.unwrap();
            drop(server);
            let mut output = Vec::new();
            let error = copy_exact(&mut client, &mut output, 6, Duration::from_secs(1), "download file").await.unwrap_err();
            assert!(matches!(error, ProtocolError::Io(_)));
        }
    }

    mod download_tests {
        use std::time::Duration;
        use tokio::io::AsyncWriteExt;
        use crate::protocol::enums::download_content::DownloadContent;
        use crate::protocol::enums::download_target::DownloadTarget;
        use crate::protocol::errors::ProtocolError;
        use crate::protocol::structs::header::Header;
        use crate::protocol::structs::storage_client::StorageClient;

        const LIMIT: Duration = Duration::from_secs(1);

        #[tokio::test]
        async fn test_download_into_buffer() {
            let (mut client, mut server) = tokio::io::duplex(4096);
            server.write_all(&Header::new(5, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"hello").await.unwrap();

            let (size, content) = StorageClient::download_exchange(&mut client, b"request", 5, DownloadTarget::Buffer, LIMIT).await.unwrap();
            assert_eq!(size, 5);
            assert_eq!(content, DownloadContent::Buffer(b"hello".to_vec()));
        }

        #[tokio::test]
        async fn test_download_rejects_reply_longer_than_requested() {
            let (mut client, mut server) = tokio::io::duplex(4096);
            server.write_all(&Header::new(19, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"nineteen bytes long").await.unwrap();

            let error = StorageClient::download_exchange(&mut client, b"request", 5, DownloadTarget::Buffer, LIMIT).await.unwrap_err();
            assert!(matches!(error, ProtocolError::InvalidBody { context: "download file", .. }));
            assert!(error.is_connection_fatal());
        }

        #[tokio::test]
        async fn test_download_huge_announced_length_to_end_of_file() {
            let (mut client, mut server) = tokio::io::duplex(4096);
            server.write_all(&Header::new(i64::MAX / 2, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"abc").await.unwrap();
            server.shutdown().await.unwrap();

            let error = StorageClient::download_exchange(&mut client, b"request", 0, DownloadTarget::Buffer, LIMIT).await.unwrap_err();
            assert!(matches!(error, ProtocolError::Io(_)));
        }

        #[tokio::test]
        async fn test_download_removes_truncated_file() {
            let directory = tempfile::tempdir().unwrap();
            let target = directory.path().join("partial.bin");
            let (mut client, mut server) = tokio::io::duplex(4096);
            server.write_all(&Header::new(100, 100, 0).to_bytes()).await.unwrap();
            server.write_all(b"abc").await.unwrap();
            server.shutdown().await.unwrap();

            let error = StorageClient::download_exchange(&mut client, b"request", 0, DownloadTarget::File(target.clone()), LIMIT).await.unwrap_err();
            assert!(matches!(error, ProtocolError::Io(_)));
            assert!(!target.exists());
        }
    }
}
