//! GRIB2 fixtures for tests.
//!
//! Builds single-grid GRIB2 messages, by default on a regular lat/lon grid
//! (template 3.0) scanned row by row, with an analysis product (template 4.0)
//! and simple packing (template 5.0, 16 bits per value, no scaling), so packed
//! integers decode exactly to `reference + value`.

use std::{
    fs,
    path::{Path, PathBuf},
};

const BITS_PER_VALUE: u8 = 16;

/// Encodes one meteorological (discipline 0) message of `ni` x `nj` points
/// scanned row by row.
pub fn grib_message(category: u8, number: u8, ni: u32, nj: u32, reference: f32, values: &[u16]) -> Vec<u8> {
    assert_eq!(values.len(), (ni * nj) as usize, "one value per grid point");
    GridMessage::new(category, number, ni, nj, reference, values).encode()
}

#[derive(Debug, Clone)]
/// A single-grid message with control over the grid layout.
pub struct GridMessage {
    pub category: u8,
    pub number: u8,
    pub ni: u32,
    pub nj: u32,
    pub grid_template: u16,
    pub scanning_mode: u8,
    pub reference: f32,
    /// Packed values, one per present point.
    pub values: Vec<u16>,
    /// Section 6 bit map, most significant bit first. `None` means every point
    /// is present.
    pub bitmap: Option<Vec<u8>>,
}

impl GridMessage {
    pub fn new(category: u8, number: u8, ni: u32, nj: u32, reference: f32, values: &[u16]) -> Self {
        GridMessage {
            category,
            number,
            ni,
            nj,
            grid_template: 0,
            scanning_mode: 0,
            reference,
            values: values.to_vec(),
            bitmap: None,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let bitmap = match &self.bitmap {
            Some(bits) => [&[0u8][..], bits.as_slice()].concat(),
            None => vec![0xff],
        };

        let mut body = Vec::new();
        body.extend(section(1, &identification()));
        body.extend(section(
            3,
            &grid_definition(self.ni, self.nj, self.grid_template, self.scanning_mode),
        ));
        body.extend(section(4, &product_definition(self.category, self.number)));
        body.extend(section(
            5,
            &data_representation(self.values.len() as u32, self.reference),
        ));
        body.extend(section(6, &bitmap));
        body.extend(section(7, &packed(&self.values)));

        let total_length = (16 + body.len() + 4) as u64;

        let mut message = Vec::with_capacity(total_length as usize);
        message.extend(b"GRIB");
        message.extend([0, 0]);
        message.push(0); // discipline
        message.push(2); // edition
        message.extend(total_length.to_be_bytes());
        message.extend(body);
        message.extend(b"7777");

        message
    }
}

/// Writes the concatenated `messages` to `dir/name`.
pub fn write_grib_file(dir: &Path, name: &str, messages: &[Vec<u8>]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, messages.concat()).unwrap();
    path
}

/// A pressure, u-wind and v-wind message on the same 3 x 2 grid.
pub fn three_field_file(dir: &Path, name: &str) -> PathBuf {
    write_grib_file(
        dir,
        name,
        &[
            grib_message(3, 0, 3, 2, 100000.0, &[1, 2, 3, 4, 5, 6]),
            grib_message(2, 2, 3, 2, -10.0, &[0, 5, 10, 15, 20, 25]),
            grib_message(2, 3, 3, 2, -20.0, &[40, 30, 20, 10, 0, 1]),
        ],
    )
}

fn section(num: u8, payload: &[u8]) -> Vec<u8> {
    let length = (payload.len() + 5) as u32;
    let mut sect = Vec::with_capacity(length as usize);
    sect.extend(length.to_be_bytes());
    sect.push(num);
    sect.extend(payload);
    sect
}

fn identification() -> Vec<u8> {
    let mut p = Vec::new();
    p.extend(34u16.to_be_bytes()); // centre: Tokyo
    p.extend(0u16.to_be_bytes());
    p.push(2); // master tables
    p.push(1); // local tables
    p.push(0); // analysis
    p.extend(2024u16.to_be_bytes());
    p.extend([1, 1, 0, 0, 0]); // month day hour minute second
    p.push(0); // operational
    p.push(0); // analysis products
    p
}

fn grid_definition(ni: u32, nj: u32, template: u16, scanning_mode: u8) -> Vec<u8> {
    let mut p = Vec::new();
    p.push(0); // source of grid definition
    p.extend((ni * nj).to_be_bytes());
    p.push(0); // no optional list
    p.push(0);
    p.extend(template.to_be_bytes());
    p.push(6); // spherical earth, 6371229 m
    p.extend([0; 15]); // radius and axes, unused for shape 6
    p.extend(ni.to_be_bytes());
    p.extend(nj.to_be_bytes());
    p.extend(0u32.to_be_bytes()); // basic angle
    p.extend(0u32.to_be_bytes()); // subdivisions
    p.extend(45_000_000u32.to_be_bytes()); // first lat
    p.extend(130_000_000u32.to_be_bytes()); // first lon
    p.push(0x30); // resolution flags
    p.extend(44_000_000u32.to_be_bytes()); // last lat
    p.extend(131_000_000u32.to_be_bytes()); // last lon
    p.extend(500_000u32.to_be_bytes()); // di
    p.extend(1_000_000u32.to_be_bytes()); // dj
    p.push(scanning_mode);
    p
}

fn product_definition(category: u8, number: u8) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend(0u16.to_be_bytes()); // no coordinate values
    p.extend(0u16.to_be_bytes()); // template 4.0
    p.push(category);
    p.push(number);
    p.push(0); // analysis
    p.push(0);
    p.push(0);
    p.extend(0u16.to_be_bytes()); // cutoff hours
    p.push(0); // cutoff minutes
    p.push(1); // hours
    p.extend(0u32.to_be_bytes()); // forecast time
    p.push(1); // ground or water surface
    p.push(0);
    p.extend(0u32.to_be_bytes());
    p.push(255); // no second surface
    p.push(0xff);
    p.extend(0xffff_ffffu32.to_be_bytes());
    p
}

fn data_representation(num_encoded: u32, reference: f32) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend(num_encoded.to_be_bytes());
    p.extend(0u16.to_be_bytes()); // template 5.0
    p.extend(reference.to_be_bytes());
    p.extend(0u16.to_be_bytes()); // binary scale factor
    p.extend(0u16.to_be_bytes()); // decimal scale factor
    p.push(BITS_PER_VALUE);
    p.push(0); // floating point original values
    p
}

fn packed(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}
