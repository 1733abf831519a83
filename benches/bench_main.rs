use byteorder::{BigEndian, WriteBytesExt};
use criterion::BenchmarkId;
use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Cursor;

fn mp4_box(typ: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.write_u32::<BigEndian>(payload.len() as u32 + 8).unwrap();
    buf.extend_from_slice(typ);
    buf.extend_from_slice(payload);
    buf
}

/// ftyp, a large mdat, then moov/mvhd at the end of the file.
fn movie(mdat_size: usize) -> Vec<u8> {
    let mut mvhd = Vec::new();
    mvhd.write_u32::<BigEndian>(0).unwrap();
    mvhd.write_u32::<BigEndian>(0).unwrap();
    mvhd.write_u32::<BigEndian>(0).unwrap();
    mvhd.write_u32::<BigEndian>(1000).unwrap();
    mvhd.write_u32::<BigEndian>(634634).unwrap();
    mvhd.extend_from_slice(&[0u8; 80]);

    let mut data = mp4_box(b"ftyp", b"isom\0\0\x02\0isomiso2avc1mp41");
    data.extend(mp4_box(b"mdat", &vec![0u8; mdat_size]));
    data.extend(mp4_box(b"moov", &mp4_box(b"mvhd", &mvhd)));
    data
}

fn read_duration(data: &[u8]) -> f64 {
    let mut reader = Cursor::new(data);
    mp4scan::read_duration(&mut reader).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = movie(1 << 20);

    c.bench_with_input(BenchmarkId::new("read_duration", data.len()), &data, |b, d| {
        b.iter(|| read_duration(d));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
