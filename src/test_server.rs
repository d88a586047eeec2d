// test_server.rs - 测试用的最小 HTTP/1.1 服务器
// 只处理 GET：按路径返回预设的状态码和内容，未登记的路径返回 404，
// 并记录收到的每个请求路径，方便断言「有没有发出请求」

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use url::Url;

type Routes = HashMap<String, (u16, Vec<u8>)>;

pub struct TestServer {
    base: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// 在后台线程启动服务器，`routes` 为 (路径, 状态码, 内容)
    ///
    /// 服务器一直运行到测试进程退出
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Arc<Routes> = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.as_bytes().to_vec())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();

        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });

        Self {
            base: Url::parse(&format!("http://127.0.0.1:{port}/")).expect("base url"),
            requests,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Url {
        self.base.join(path).expect("join")
    }

    /// 目前为止收到的请求路径（按到达顺序）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock").clone()
    }
}

fn handle(mut stream: TcpStream, routes: &Routes, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, body) = routes
        .get(&path)
        .map(|(status, body)| (*status, body.as_slice()))
        .unwrap_or((404, b"not found".as_slice()));

    log.lock().expect("lock").push(path);

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let head = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
