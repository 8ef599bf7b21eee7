//! Literal regression vectors for every algorithm and width.
//!
//! The algorithms are defined by their exact bit manipulations, so these
//! values are the contract: any change here breaks agreement with hosts that
//! already stored fingerprints.

use fingerprint::{Avalanche, Fingerprint, Fnv, Fnv1a, Jenkins};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

const ALL_BYTES: [u8; 256] = {
  let mut out = [0u8; 256];
  let mut i = 0;
  while i < 256 {
    out[i] = i as u8;
    i += 1;
  }
  out
};

/// `(name, fingerprint16, fingerprint32, fingerprint64)`.
type Vector = (&'static str, i16, i32, i64);

fn check<F: Fingerprint>(vectors: &[(Option<&[u8]>, Vector)]) {
  for &(data, (name, w16, w32, w64)) in vectors {
    assert_eq!(F::fingerprint16(data), w16, "{}: 16-bit mismatch for {name}", F::NAME);
    assert_eq!(F::fingerprint32(data), w32, "{}: 32-bit mismatch for {name}", F::NAME);
    assert_eq!(F::fingerprint64(data), w64, "{}: 64-bit mismatch for {name}", F::NAME);
  }
}

#[test]
fn avalanche_vectors() {
  check::<Avalanche>(&[
    (None, ("absent", 0, 0, 0)),
    (Some(&b""[..]), ("empty", -1119, 816171780, -382312417359295515)),
    (Some(&b"a"[..]), ("a", 18317, 16664435, 4684061423972607615)),
    (Some(&b"abc"[..]), ("abc", -19393, 616927482, 2823033565085236968)),
    (Some(&b"hello world"[..]), ("hello_world", 16334, 1248884158, -333715240779902337)),
    (Some(FOX), ("quick_brown_fox", 6387, -97918246, 8669879010902703068)),
    (Some("café".as_bytes()), ("utf8_cafe", -2724, 1665373727, 8985112390252240386)),
    (Some(&ALL_BYTES[..]), ("all_bytes", 6293, 1279218858, -2212470438763369103)),
  ]);
}

#[test]
fn jenkins_vectors() {
  check::<Jenkins>(&[
    (None, ("absent", 15401, 433494437, 3351327063330979839)),
    (Some(&b""[..]), ("empty", 0, 0, 0)),
    (Some(&b"a"[..]), ("a", -7001, -596231983, -2560796864840920195)),
    (Some(&b"abc"[..]), ("abc", 21403, 1090917021, 4685452928347608720)),
    (Some(&b"hello world"[..]), ("hello_world", -28702, -148997892, -639941071597062389)),
    (Some(FOX), ("quick_brown_fox", 5834, -2125817984, -9130318717785691736)),
    (Some("café".as_bytes()), ("utf8_cafe", -25894, 1412812527, 6067983602958220881)),
    (Some(&ALL_BYTES[..]), ("all_bytes", -17440, 1749341092, 7513362782630265484)),
  ]);
}

#[test]
fn fnv_vectors() {
  check::<Fnv>(&[
    (None, ("absent", 0, 0, 0)),
    (Some(&b""[..]), ("empty", -4079, 1339080641, -3750763034362895579)),
    (Some(&b"a"[..]), ("a", -21465, -1079831676, -3815790196693629812)),
    (Some(&b"abc"[..]), ("abc", -2128, -608752633, 9047779259592410955)),
    (Some(&b"hello world"[..]), ("hello_world", -27337, 345801131, 8702558995780023015)),
    (Some(FOX), ("quick_brown_fox", 22831, -1026253829, -1704187037440206576)),
    (Some("café".as_bytes()), ("utf8_cafe", -25036, 1773467520, 355478746819075465)),
    (Some(&ALL_BYTES[..]), ("all_bytes", -27877, -223583817, 1261948608982234661)),
  ]);
}

#[test]
fn fnv1a_vectors() {
  check::<Fnv1a>(&[
    (None, ("absent", 0, 0, 0)),
    (Some(&b""[..]), ("empty", -4079, 1339080641, -3750763034362895579)),
    (Some(&b"a"[..]), ("a", 6562, 694300864, -5808556873153909620)),
    (Some(&b"abc"[..]), ("abc", 5900, -497093294, -1792535898324117685)),
    (Some(&b"hello world"[..]), ("hello_world", -15706, 1973860096, 8618312879776256743)),
    (Some(FOX), ("quick_brown_fox", -11528, 337495781, -866459186506731248)),
    (Some("café".as_bytes()), ("utf8_cafe", 2303, -2025025613, 5253592154431032713)),
    (Some(&ALL_BYTES[..]), ("all_bytes", -7690, 193063543, 4774620800949106213)),
  ]);
}
