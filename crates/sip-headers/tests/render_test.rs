// Rendering through the buffer pool

mod common;

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use common::{header, init_tracing};
use rvoip_sip_headers::prelude::*;
use rvoip_sip_headers::types::render::{global_pool, render_optional, write_header};

/// Sink that fails after accepting `limit` bytes.
struct Truncated {
    limit: usize,
    written: Vec<u8>,
}

impl Write for Truncated {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sample_headers() -> Vec<TypedHeader> {
    vec![
        header("Via", "SIP/2.0/UDP pc33.atlanta.com;received=192.0.2.1;branch=z9hG4bK776asdhds"),
        header("From", "Alice <sip:alice@atlanta.com>;tag=1928301774"),
        header("Contact", "<sip:alice@pc33.atlanta.com>;expires=60;q=0.5"),
        header("Content-Type", "application/sdp"),
        header("Authorization", "Digest username=\"bob\", realm=\"biloxi.com\", nonce=\"abc\", response=\"6629fae49393a05397450978507c4ef1\""),
        header("X-Custom", "opaque value"),
    ]
}

#[test]
fn test_pooled_and_unpooled_output_identical() {
    init_tracing();
    let disabled = BufferPool::disabled();
    let small = BufferPool::new(1);
    for h in sample_headers() {
        for opts in [RenderOptions::default(), RenderOptions::compact()] {
            let mut pooled = Vec::new();
            let mut unpooled = Vec::new();
            let mut tiny = Vec::new();
            let n = h.render(&mut pooled, &opts).unwrap();
            h.render_with_pool(&disabled, &mut unpooled, &opts).unwrap();
            h.render_with_pool(&small, &mut tiny, &opts).unwrap();
            assert_eq!(pooled, unpooled);
            assert_eq!(pooled, tiny);
            assert_eq!(n, pooled.len());
            assert_eq!(String::from_utf8(pooled).unwrap(), h.to_header_string(&opts));
        }
    }
    assert_eq!(disabled.idle(), 0);
    assert!(small.idle() <= 1);
}

#[test]
fn test_compact_names() {
    let via = header("Via", "SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds");
    assert_eq!(
        via.to_header_string(&RenderOptions::compact()),
        "v: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds"
    );

    // headers without a compact form keep their canonical name
    let cseq = header("CSeq", "1 INVITE");
    assert_eq!(cseq.to_header_string(&RenderOptions::compact()), "CSeq: 1 INVITE");

    let mut out = String::new();
    write_header(&mut out, &header("Call-ID", "a84b4c76e66710"), &RenderOptions::compact()).unwrap();
    assert_eq!(out, "i: a84b4c76e66710");
}

#[test]
fn test_absent_header_writes_nothing() {
    let mut out = Vec::new();
    let n = render_optional::<Via>(None, &mut out, &RenderOptions::default()).unwrap();
    assert_eq!(n, 0);
    assert!(out.is_empty());

    let via: Via = "SIP/2.0/TCP client.example.com".parse().unwrap();
    let n = render_optional(Some(&via), &mut out, &RenderOptions::default()).unwrap();
    assert_eq!(out, b"Via: SIP/2.0/TCP client.example.com");
    assert_eq!(n, out.len());
}

#[test]
fn test_sink_error_is_reported() {
    let h = header("Subject", "a subject longer than the sink");
    let mut sink = Truncated { limit: 8, written: Vec::new() };
    let err = h.render(&mut sink, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {:?}", err);
    assert!(sink.written.is_empty());

    // the pool is still usable afterwards
    let mut out = Vec::new();
    h.render(&mut out, &RenderOptions::default()).unwrap();
    assert_eq!(out, b"Subject: a subject longer than the sink");
}

#[test]
fn test_concurrent_rendering_shares_the_pool() {
    let headers = Arc::new(sample_headers());
    let expected: Vec<String> = headers.iter().map(|h| h.to_header_string(&RenderOptions::default())).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let headers = Arc::clone(&headers);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..100 {
                    for (h, want) in headers.iter().zip(expected.iter()) {
                        let mut out = Vec::new();
                        h.render(&mut out, &RenderOptions::default()).unwrap();
                        assert_eq!(out, want.as_bytes());
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(global_pool().idle() <= rvoip_sip_headers::types::render::DEFAULT_POOL_SIZE);
}

#[test]
fn test_parameters_render_deterministically() {
    let contact = header("Contact", "<sip:a@example.com>;zeta=1;Alpha=2;q=0.3;beta");
    assert_eq!(contact.to_string(), "<sip:a@example.com>;q=0.3;Alpha=2;beta;zeta=1");

    let mut values = Values::new();
    values.append("b", "2").append("a", "1").append("b", "3");
    assert_eq!(values.to_string(), ";a=1;b=2;b=3");
}
