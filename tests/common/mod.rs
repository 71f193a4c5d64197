#![allow(dead_code)]
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use fdfs_client::config::structs::configuration::Configuration;
use fdfs_client::config::structs::pool_config::PoolConfig;

pub const GROUP: &str = "group1";
pub const ENOENT: u8 = 2;
pub const EEXIST: u8 = 17;
pub const EINVAL: u8 = 22;

/// What the fake cluster saw and stores.
#[derive(Default)]
pub struct ClusterState {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
    pub tracker_commands: Mutex<Vec<u8>>,
    pub storage_commands: Mutex<Vec<u8>>,
    pub tracker_accepts: AtomicUsize,
    pub storage_accepts: AtomicUsize,
    pub quits: AtomicUsize,
    pub next_id: AtomicUsize,
}

/// One tracker and one storage node on 127.0.0.1, serving group `group1`.
pub struct FakeCluster {
    pub tracker_port: u16,
    pub storage_port: u16,
    pub state: Arc<ClusterState>,
}

#[derive(Clone, Copy)]
enum Role {
    Tracker,
    Storage,
}

impl FakeCluster {
    pub async fn start() -> FakeCluster {
        Self::start_on("127.0.0.1").await
    }

    pub async fn start_on(tracker_host: &str) -> FakeCluster {
        let state = Arc::new(ClusterState::default());
        let storage = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let storage_port = storage.local_addr().unwrap().port();
        let tracker = TcpListener::bind((tracker_host, 0)).await.unwrap();
        let tracker_port = tracker.local_addr().unwrap().port();

        tokio::spawn(serve(tracker, Role::Tracker, Arc::clone(&state), storage_port));
        tokio::spawn(serve(storage, Role::Storage, Arc::clone(&state), storage_port));

        FakeCluster { tracker_port, storage_port, state }
    }

    pub fn config(&self) -> Configuration {
        let mut config = Configuration::init();
        config.log_level = "off".to_string();
        config.tracker_server = format!("127.0.0.1:{}", self.tracker_port);
        config.connect_timeout = 2;
        config.network_timeout = 5;
        config.tracker_pool = PoolConfig::new(1, 4);
        config.storage_pool = PoolConfig::new(1, 4);
        config
    }

    pub fn tracker_commands(&self) -> Vec<u8> {
        self.state.tracker_commands.lock().clone()
    }

    pub fn storage_commands(&self) -> Vec<u8> {
        self.state.storage_commands.lock().clone()
    }

    pub fn command_count(&self) -> usize {
        self.tracker_commands().len() + self.storage_commands().len()
    }

    pub fn stored(&self, remote_filename: &str) -> Option<Vec<u8>> {
        self.state.files.lock().get(remote_filename).cloned()
    }
}

async fn serve(listener: TcpListener, role: Role, state: Arc<ClusterState>, storage_port: u16) {
    while let Ok((socket, _)) = listener.accept().await {
        match role {
            Role::Tracker => state.tracker_accepts.fetch_add(1, Ordering::SeqCst),
            Role::Storage => state.storage_accepts.fetch_add(1, Ordering::SeqCst),
        };
        tokio::spawn(connection(socket, role, Arc::clone(&state), storage_port));
    }
}

async fn connection(mut socket: TcpStream, role: Role, state: Arc<ClusterState>, storage_port: u16) {
    loop {
        let mut header = [0u8; 10];
        if socket.read_exact(&mut header).await.is_err() {
            return;
        }
        let mut cursor = Cursor::new(&header[..]);
        let pkg_len = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
        let cmd = ReadBytesExt::read_u8(&mut cursor).unwrap();
        let mut body = vec![0u8; pkg_len];
        if socket.read_exact(&mut body).await.is_err() {
            return;
        }
        if cmd == 82 {
            state.quits.fetch_add(1, Ordering::SeqCst);
            return;
        }
        let (status, reply) = match role {
            Role::Tracker => {
                state.tracker_commands.lock().push(cmd);
                tracker_reply(cmd, &body, storage_port)
            }
            Role::Storage => {
                state.storage_commands.lock().push(cmd);
                storage_reply(cmd, &body, &state)
            }
        };
        let mut packet = Vec::with_capacity(10 + reply.len());
        WriteBytesExt::write_i64::<BigEndian>(&mut packet, reply.len() as i64).unwrap();
        packet.push(100);
        packet.push(status);
        packet.extend_from_slice(&reply);
        if socket.write_all(&packet).await.is_err() {
            return;
        }
    }
}

fn fixed(value: &str, len: usize) -> Vec<u8> {
    let mut field = value.as_bytes().to_vec();
    field.resize(len, 0);
    field
}

fn unfixed(field: &[u8]) -> String {
    let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn endpoint(storage_port: u16) -> Vec<u8> {
    let mut body = fixed(GROUP, 16);
    body.extend_from_slice(&fixed("127.0.0.1", 15));
    WriteBytesExt::write_i64::<BigEndian>(&mut body, storage_port as i64).unwrap();
    body
}

fn tracker_reply(cmd: u8, body: &[u8], storage_port: u16) -> (u8, Vec<u8>) {
    match cmd {
        101 => {
            let mut reply = endpoint(storage_port);
            reply.push(0);
            (0, reply)
        }
        104 => {
            if unfixed(&body[..16]) != GROUP {
                return (ENOENT, Vec::new());
            }
            let mut reply = endpoint(storage_port);
            reply.push(0);
            (0, reply)
        }
        102 | 103 => {
            if unfixed(&body[..16]) != GROUP {
                return (ENOENT, Vec::new());
            }
            (0, endpoint(storage_port))
        }
        111 => (0, Vec::new()),
        _ => (EINVAL, Vec::new()),
    }
}

fn storage_reply(cmd: u8, body: &[u8], state: &ClusterState) -> (u8, Vec<u8>) {
    let mut cursor = Cursor::new(body);
    match cmd {
        11 | 23 => {
            let _store_path_index = ReadBytesExt::read_u8(&mut cursor).unwrap();
            let size = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
            let ext = unfixed(&body[9..15]);
            let content = body[15..15 + size].to_vec();
            let id = state.next_id.fetch_add(1, Ordering::SeqCst);
            let marker = if cmd == 23 { "A" } else { "" };
            let filename = if ext.is_empty() {
                format!("M00/00/00/{}{:08}", marker, id)
            } else {
                format!("M00/00/00/{}{:08}.{}", marker, id, ext)
            };
            state.files.lock().insert(filename.clone(), content);
            let mut reply = fixed(GROUP, 16);
            reply.extend_from_slice(filename.as_bytes());
            (0, reply)
        }
        21 => {
            let master_len = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
            let size = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
            let prefix = unfixed(&body[16..32]);
            let ext = unfixed(&body[32..38]);
            let master = String::from_utf8_lossy(&body[38..38 + master_len]).into_owned();
            let content = body[38 + master_len..38 + master_len + size].to_vec();
            let mut files = state.files.lock();
            if !files.contains_key(&master) {
                return (ENOENT, Vec::new());
            }
            let stem = master.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(&master);
            let filename = format!("{}{}.{}", stem, prefix, ext);
            if files.contains_key(&filename) {
                return (EEXIST, Vec::new());
            }
            files.insert(filename.clone(), content);
            let mut reply = fixed(GROUP, 16);
            reply.extend_from_slice(filename.as_bytes());
            (0, reply)
        }
        12 => {
            let filename = String::from_utf8_lossy(&body[16..]).into_owned();
            match state.files.lock().remove(&filename) {
                Some(_) => (0, Vec::new()),
                None => (ENOENT, Vec::new()),
            }
        }
        14 => {
            let offset = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
            let size = ReadBytesExt::read_i64::<BigEndian>(&mut cursor).unwrap() as usize;
            let filename = String::from_utf8_lossy(&body[32..]).into_owned();
            let files = state.files.lock();
            let Some(content) = files.get(&filename) else {
                return (ENOENT, Vec::new());
            };
            if offset > content.len() {
                return (EINVAL, Vec::new());
            }
            let end = if size == 0 { content.len() } else { (offset + size).min(content.len()) };
            (0, content[offset..end].to_vec())
        }
        111 => (0, Vec::new()),
        _ => (EINVAL, Vec::new()),
    }
}
