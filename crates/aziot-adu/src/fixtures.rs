//! Test fixtures: two root keys, a manifest and its signed token.
//!
//! The signing key certificate embedded in [`MANIFEST_JWS`] is signed by
//! the `ADU.200703.R` root key, and certifies the key signing the manifest.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::keys::RootKey;

const EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];

pub(crate) const ROOT_KEYS: [RootKey<'static>; 2] = [
    RootKey::new("ADU.200702.R", &ROOT_200702_MODULUS, &EXPONENT),
    RootKey::new("ADU.200703.R", &ROOT_200703_MODULUS, &EXPONENT),
];

pub(crate) const SIGNING_ROOT_KEY: RootKey<'static> = ROOT_KEYS[1];

// Returns the signing input and the decoded signature of the signing key
// certificate.
pub(crate) fn signing_key_certificate() -> (String, Vec<u8>) {
    let (header, _) = MANIFEST_JWS.split_once('.').unwrap();
    let header = URL_SAFE_NO_PAD.decode(header).unwrap();
    let header: serde_json::Value = serde_json::from_slice(&header).unwrap();

    let sjwk = header["sjwk"].as_str().unwrap();
    let (signing_input, signature) = sjwk.rsplit_once('.').unwrap();

    (
        signing_input.to_owned(),
        URL_SAFE_NO_PAD.decode(signature).unwrap(),
    )
}

const ROOT_200702_MODULUS: [u8; 384] = [
    0x98, 0xb7, 0x3c, 0x83, 0x88, 0xac, 0x97, 0x29, 0x61, 0x63, 0x0c, 0x67,
    0x43, 0x9c, 0xdf, 0xbe, 0xe0, 0x7f, 0x50, 0xe6, 0x4d, 0x74, 0xbb, 0x41,
    0x58, 0x36, 0xda, 0x1b, 0x38, 0x5c, 0x67, 0xa1, 0x22, 0xd0, 0x6a, 0x15,
    0xb2, 0x6d, 0xeb, 0xba, 0x68, 0xd5, 0x00, 0xd1, 0xfb, 0x9d, 0xf5, 0x60,
    0x47, 0x24, 0x76, 0x19, 0xad, 0xb6, 0xd2, 0x3e, 0x60, 0x70, 0x53, 0xe1,
    0xfc, 0xdc, 0xa4, 0xc6, 0xa3, 0xfa, 0x86, 0x0a, 0x76, 0xf8, 0x3f, 0x68,
    0xe1, 0xe0, 0xa7, 0x17, 0x50, 0x19, 0x60, 0x11, 0x2f, 0x34, 0x37, 0xc1,
    0x3d, 0xf2, 0x92, 0x4e, 0x49, 0xfd, 0x3a, 0xaa, 0x89, 0x43, 0xf8, 0x65,
    0x06, 0xd4, 0x16, 0xfa, 0x92, 0xe1, 0x05, 0xdc, 0x58, 0x7a, 0x11, 0xa9,
    0xf4, 0xda, 0x09, 0x4a, 0xc3, 0x98, 0xd3, 0x39, 0x65, 0xb0, 0x5f, 0x70,
    0xb0, 0x6b, 0xbd, 0xdc, 0x8f, 0x0b, 0xe4, 0xb7, 0x71, 0x36, 0x54, 0xe8,
    0x58, 0xab, 0xaf, 0x2f, 0x9b, 0xc8, 0xda, 0xc5, 0xcc, 0x1f, 0x23, 0x9c,
    0xb5, 0x31, 0xb5, 0x3e, 0x6e, 0x98, 0x41, 0x98, 0xa1, 0xc4, 0xbe, 0x3e,
    0xde, 0x89, 0xb9, 0x29, 0x6c, 0x66, 0x2d, 0x3c, 0x76, 0xbf, 0xa3, 0xe2,
    0xc1, 0x91, 0x28, 0xaf, 0x76, 0x98, 0xc3, 0x88, 0x0e, 0x42, 0x1d, 0x4e,
    0xbc, 0x25, 0x46, 0x7f, 0x53, 0xdd, 0x28, 0xf6, 0xc0, 0x0a, 0x30, 0xc8,
    0xc3, 0x31, 0x8c, 0x58, 0x8e, 0x50, 0x32, 0xc2, 0x25, 0x2a, 0xfb, 0xa0,
    0xc8, 0xe4, 0x2e, 0x67, 0x09, 0xef, 0xd6, 0x1a, 0x98, 0x63, 0x92, 0x11,
    0x1a, 0xf1, 0x86, 0xbd, 0x35, 0x60, 0x34, 0xb7, 0x9b, 0xb1, 0x16, 0x98,
    0x8a, 0x06, 0x33, 0x65, 0xbc, 0x89, 0x22, 0x39, 0x7d, 0xbd, 0x8b, 0xa7,
    0x01, 0xea, 0x1d, 0x47, 0xf6, 0xea, 0x50, 0xc2, 0x5e, 0x6b, 0x60, 0xe2,
    0xfd, 0x24, 0xa1, 0x42, 0x9e, 0x92, 0xbc, 0xff, 0xc8, 0x97, 0x04, 0x47,
    0x37, 0x82, 0x6a, 0x97, 0xec, 0xf1, 0x86, 0x74, 0xa0, 0x95, 0x72, 0xcd,
    0x97, 0xdc, 0x93, 0x83, 0x76, 0x44, 0x3c, 0xeb, 0xd7, 0xb3, 0x1a, 0x64,
    0x92, 0x8b, 0xc9, 0x57, 0x5a, 0x99, 0xb8, 0x8e, 0x2a, 0xe7, 0x29, 0xac,
    0xe1, 0x89, 0xfb, 0xa3, 0x4c, 0x48, 0x77, 0x98, 0x3f, 0xf3, 0x00, 0x62,
    0x08, 0x42, 0x97, 0x37, 0xe9, 0x03, 0x89, 0x8e, 0x01, 0x53, 0x8f, 0x1d,
    0xa9, 0xe7, 0xa4, 0x81, 0x74, 0x22, 0xe2, 0x55, 0x74, 0x59, 0xc6, 0x70,
    0x13, 0x82, 0x28, 0xaf, 0x1a, 0x6b, 0x6d, 0x2d, 0x3e, 0x73, 0xda, 0xfe,
    0x56, 0x55, 0x87, 0x8b, 0xe9, 0x8f, 0x07, 0xfd, 0xb5, 0xa7, 0xb8, 0x1e,
    0x75, 0xba, 0xa0, 0xa0, 0x35, 0x6e, 0x03, 0xa5, 0x57, 0x05, 0x35, 0x89,
    0xd3, 0x7e, 0x40, 0xe9, 0xbb, 0x00, 0xd9, 0x3a, 0x99, 0x55, 0x23, 0xc5,
];

const ROOT_200703_MODULUS: [u8; 384] = [
    0xcc, 0x16, 0xa5, 0x97, 0x05, 0x04, 0xd3, 0xe8, 0x34, 0x9d, 0x90, 0xe7,
    0xaf, 0x2e, 0x56, 0x59, 0xf3, 0x8b, 0xd2, 0x96, 0x9f, 0xa8, 0xb9, 0x06,
    0x48, 0x5a, 0x84, 0x08, 0x28, 0x70, 0x54, 0x6c, 0xf6, 0x7a, 0x07, 0xa0,
    0xaf, 0x1c, 0xdd, 0xc3, 0x10, 0x2a, 0xf0, 0xc7, 0xe0, 0x01, 0xf2, 0x01,
    0x96, 0x5f, 0x83, 0xa3, 0xb3, 0x6f, 0xc0, 0x09, 0xb1, 0xe2, 0x32, 0x80,
    0x9f, 0x06, 0xe9, 0x9d, 0x55, 0xc4, 0x8a, 0x88, 0x97, 0x49, 0x84, 0x13,
    0x7e, 0xab, 0x83, 0xb0, 0x43, 0x54, 0x85, 0x49, 0xda, 0xb4, 0x21, 0xb7,
    0x3f, 0x7d, 0x95, 0xa5, 0x89, 0x58, 0xce, 0xd9, 0xb4, 0xeb, 0x15, 0xb4,
    0x28, 0x90, 0x8a, 0x5b, 0xef, 0x6f, 0xd7, 0x39, 0xc2, 0x39, 0xfb, 0x0f,
    0x9a, 0x71, 0xfc, 0x5a, 0x0d, 0x51, 0x77, 0x4b, 0xd4, 0xd8, 0xe1, 0x50,
    0x35, 0xa6, 0xc4, 0x29, 0x69, 0xde, 0x98, 0x7f, 0x6e, 0x03, 0x4b, 0xe6,
    0x35, 0x11, 0x0a, 0x8e, 0xdd, 0x43, 0x9a, 0xda, 0x49, 0xca, 0xa4, 0x2f,
    0x26, 0x05, 0xbd, 0xa6, 0x69, 0x1b, 0xda, 0x8f, 0xca, 0x71, 0x26, 0x98,
    0xea, 0x1d, 0x8f, 0xc8, 0x4d, 0x69, 0xd9, 0x80, 0x37, 0x4e, 0x8b, 0xc4,
    0xbb, 0xa2, 0x92, 0x97, 0xea, 0x39, 0xf9, 0xd4, 0xe0, 0x46, 0x42, 0xb6,
    0xb9, 0x62, 0x03, 0x56, 0x8b, 0xa4, 0xc4, 0x93, 0x88, 0x38, 0xb0, 0xb9,
    0xe0, 0x6a, 0x9e, 0x88, 0x1d, 0xaa, 0xb4, 0xbc, 0xe6, 0xf9, 0xcd, 0xd9,
    0xc2, 0xeb, 0xf0, 0x5d, 0xf2, 0xfb, 0x10, 0x5e, 0xb8, 0xd7, 0x4e, 0x4e,
    0x13, 0x2e, 0xa7, 0xb9, 0x02, 0x80, 0x4d, 0x64, 0x3b, 0x6e, 0x04, 0xb0,
    0xd2, 0xa7, 0xdc, 0xc6, 0x2a, 0xa2, 0xff, 0x3b, 0x51, 0x28, 0xeb, 0xa0,
    0x34, 0xfa, 0x29, 0xf2, 0x47, 0x00, 0x0a, 0xea, 0x55, 0x95, 0x66, 0x85,
    0x72, 0x08, 0x39, 0xcf, 0xc3, 0xfe, 0x8c, 0xfd, 0xd7, 0x58, 0x89, 0xf4,
    0x7e, 0x2b, 0x22, 0xa7, 0x1c, 0x40, 0x70, 0x71, 0x3e, 0x98, 0x43, 0xeb,
    0x9a, 0x83, 0x0c, 0xbd, 0xa2, 0xb8, 0xfa, 0xf7, 0x3d, 0x49, 0x24, 0x4e,
    0x0a, 0x46, 0x7b, 0x88, 0x61, 0xa5, 0x40, 0x3c, 0xdb, 0x1f, 0x03, 0x23,
    0xc0, 0x67, 0x99, 0xe6, 0x09, 0xff, 0x42, 0x01, 0x34, 0x97, 0x38, 0x93,
    0x0d, 0x9a, 0xd2, 0xa1, 0xef, 0x3e, 0x37, 0xa7, 0x44, 0xe6, 0x28, 0x36,
    0x12, 0x34, 0xec, 0x64, 0x9b, 0xc9, 0x7a, 0xb6, 0x84, 0x98, 0xcb, 0x36,
    0xd4, 0x27, 0x5c, 0x5c, 0x6c, 0x0e, 0xda, 0x54, 0x15, 0x55, 0x77, 0x6b,
    0x8f, 0x2d, 0x6e, 0x02, 0x7f, 0x31, 0xa7, 0x2f, 0xf0, 0x73, 0xcb, 0x7b,
    0x13, 0x34, 0xc1, 0x83, 0x14, 0x93, 0xda, 0x03, 0x87, 0x24, 0x00, 0xc0,
    0xf7, 0xfe, 0x0b, 0xd8, 0x3f, 0x1f, 0xa4, 0x17, 0x01, 0xb4, 0x9a, 0x89,
];

pub(crate) const MANIFEST: &str = concat!(
    "{\"manifestVersion\":\"4\",\"updateId\":{\"provider\":\"Contoso\",\"name\":\"Toaster\",\"version\":\"1.2.0\"",
    "},\"compatibility\":[{\"deviceManufacturer\":\"Contoso\",\"deviceModel\":\"Toaster\"}],\"instructions",
    "\":{\"steps\":[{\"handler\":\"microsoft/swupdate:1\",\"files\":[\"f8a9c2b7e1d04f6a\"],\"handlerPropert",
    "ies\":{\"installedCriteria\":\"1.2.0\"}}]},\"files\":{\"f8a9c2b7e1d04f6a\":{\"fileName\":\"toaster-1.2",
    ".0.bin\",\"sizeInBytes\":21,\"hashes\":{\"sha256\":\"LhH4PGO2CrLZ80xxFm3/IdwwHeuJkTbNY0ndIElAX0s=\"",
    "}}},\"createdDateTime\":\"2026-03-02T09:14:27.5310442Z\"}",
);

pub(crate) const MANIFEST_JWS: &str = concat!(
    "eyJhbGciOiJSUzI1NiIsInNqd2siOiJleUpoYkdjaU9pSlNVekkxTmlJc0ltdHBaQ0k2SWtGRVZTNHlNREEzTURNdV",
    "VpSjkuZXlKcmRIa2lPaUpTVTBFaUxDSnVJam9pY0M4M2EwTk5VVFkwZDJzclJuQXZRMVJJYTBodVFtVm1kbkp5VWpW",
    "WlRXcFpablZUVVc5SlRtcG1SVTFtTTNjMVEzVXpOa2REZDJkRVpXTTRhWFZzWjJSc1VtNTNWRTVDT1V0SE16VnFUal",
    "pUYVU5WldYWnBLM1F3VGxKS1lqbERTa05IVERaVVFYWldMemxrU1Uxa2JYTnhSbEk1Y21oWFR6QlNhV2xqY1dOdU9X",
    "bEROUzkwZDNORmJXTkJNQzhyZVZFeFMwUmxRMjVUVTJwVlFWZHhUbVF3VFd0UFowa3JSSHBXY1dsbVlUTndSV0kyYV",
    "hadlpHaGpXRmhHTVcxSFZVRTBaMkY2Ykc5dlIyUXZlbTVvTlcxRFVXaHdPRkZpUmpSWVVtOHdSR0ZUU0RCaEwxVnNa",
    "MnhxZWpOTFJGTjZMM1U0WVZSdE1VaG5NVmNyUkdodVZ6aFFVMUp0U0RsbVpuaGhTbnBwTUVNMFRsUkJPWFZRWld0b1",
    "kwSmxNbTlVVVRFMVMweHlWRU5tUWpaQlIwSktMMnBMY2t4RVNsaFlRMWcyVjA1dFVsSkphbUUyUWtsblpIcHpTREl2",
    "WlV0VlpUTlRRamgxYzBKSlRuaExSa2hXUzNCVVMwcEJObVIwUzFKTWIxb3ZURWs0T0Zkck1IQklVemhGVVRNMGNEWj",
    "NUMFpuUTNoNVVHNWlOV1ZDUjJ4NlZWTklTRzFpVUV4V2EyUjNibXhXV0VoWk9IQnNSalZrYjNwcmJXZHBVamRJUW05",
    "R0wxZFdSRFZ6ZUVwTVEydE9ZbTVSVEc5UFlYSnFVa3hCTVc1dFl6UnRWM0JRY1dKNk5sQm5iVk5EWlc1NGNHNUNkVU",
    "pQTkVjeGVVcGFVR0Z5TWxKdVZtaEpXRGx1WTFwMVNrMW5ZV3dpTENKbElqb2lRVkZCUWlJc0ltRnNaeUk2SWxKVE1q",
    "VTJJaXdpYTJsa0lqb2lRVVJWTGxOcFoyNXBibWN1TWpBeU5pMHdNUzB4TlNKOS5XLUZKdGhZZFdZUGZPbUtPQUN4b0",
    "F1WTVWVlBIeEpJanFYTGNvRnB6SVJkeGs4bWJNTWNXUmNwTmdYZldWX0IyLVdITm5zU3dsRHhacUtDMjNWUllJbGFu",
    "S01PZENHbE56am1fUVJsTjRNcENScmh4V0NNc1lHcjBKXzAwT2ZtbFpzNVVZcWRIVVVRaWdTUnRvNmJLSlE2eF9XbT",
    "I4TUtMMHNaQ05uaGFWMDlqTV9ULWlYRWU2aWQ5bVNZdkFXTTlUYTllUTFGRFhZdW9mTk5lNjl4dndvM1lYLWkxWXND",
    "SmpxZ05BTm00X0M1Y0ZWM0hyTjd1Tk1DYXFCdTliWFQ5eGdkVmRKeTZ0ZHNyaTBOV05Vcl9KWGNWbTVZN3RtVlNTVj",
    "NxQmVLUW52WmIzZnB5aXBoLUJQOUlOeTRzNFhQOE9oMXI4c3pNNUhyVDBlNXR6aV9mRGtNWXowWWxqMDE0Z3dDODNF",
    "SjM5VG9GZmkwakhmcnZZQmtGTXFiSHQ0dExINDRvTDR4cHFNVWJadmZqNUZxZmFOenRSaEJzN0VqQVl3TXNIZDRZZ2",
    "43bDBFRjVoNU5jZWIxMEFZVUZYeU9tbWNKekYyZm9mcmJtOTF2UkdiSGp0OHJaMXdZMnFJYnFRSklzd3RPRWFtcHdt",
    "MW02N0pfY2ozODl2dlB6Rm9SZCJ9.eyJzaGEyNTYiOiJPOGhDbzE5SVFvd0pEWnkwbWtXNURUZGlpZjBiV0VsMWFDb",
    "mg4ZzhmRmRnPSJ9.EZTIKGbHFNrYNpDnAgw8rxmpyLnXCNDkLvBQ9MQ9ZtQD-1Ngj4VWeGUNjQdo8L3clBSvoud1By",
    "FfxRnELHJ059jaloYSJL_K385wjo7FVuZGyk9S26kX4rJ8lGhK-FZccrOhhvThSwc-13DKi6yz2Kxgmtre79lpx1CQ",
    "xQFf7OE-Ii1aZJ8ZThIdQ1bh3B2ZeTCnql126zRd-VgOkOn_V65iOiIyZSnp-BmrrURzl1zM0Xp-94CyjUpianvHI8",
    "GC_31jyqbuXZzpwQw4v5cboQBrxfioYCfweziHQ4Axsk5O5vsOK6Fo1oXHX8KNFvMaxCUqH2wusFD8hRImLN75sjqR",
    "UPV-mhXtoAS71pDNIuIzMHgeVySvB4of43qBtpq8u9VUiNoxfS6vBR2vlesCj-L5hgSWkpmHysbfPR29_PdcFXXDNW",
    "vMn3PpF69ZtvEIK03sFx0HnwX74saCLjnNNIjEAPvqDOHXWxmv0UhHrZ1GAE08BF9j3qOMjUGBkoyl",
);

pub(crate) const UNTRUSTED_KID_JWS: &str = concat!(
    "eyJhbGciOiJSUzI1NiIsInNqd2siOiJleUpoYkdjaU9pSlNVekkxTmlJc0ltdHBaQ0k2SWtGRVZTNHlNVEEyTURrdV",
    "VpSjkuZXlKcmRIa2lPaUpTVTBFaUxDSnVJam9pY0M4M2EwTk5VVFkwZDJzclJuQXZRMVJJYTBodVFtVm1kbkp5VWpW",
    "WlRXcFpablZUVVc5SlRtcG1SVTFtTTNjMVEzVXpOa2REZDJkRVpXTTRhWFZzWjJSc1VtNTNWRTVDT1V0SE16VnFUal",
    "pUYVU5WldYWnBLM1F3VGxKS1lqbERTa05IVERaVVFYWldMemxrU1Uxa2JYTnhSbEk1Y21oWFR6QlNhV2xqY1dOdU9X",
    "bEROUzkwZDNORmJXTkJNQzhyZVZFeFMwUmxRMjVUVTJwVlFWZHhUbVF3VFd0UFowa3JSSHBXY1dsbVlUTndSV0kyYV",
    "hadlpHaGpXRmhHTVcxSFZVRTBaMkY2Ykc5dlIyUXZlbTVvTlcxRFVXaHdPRkZpUmpSWVVtOHdSR0ZUU0RCaEwxVnNa",
    "MnhxZWpOTFJGTjZMM1U0WVZSdE1VaG5NVmNyUkdodVZ6aFFVMUp0U0RsbVpuaGhTbnBwTUVNMFRsUkJPWFZRWld0b1",
    "kwSmxNbTlVVVRFMVMweHlWRU5tUWpaQlIwSktMMnBMY2t4RVNsaFlRMWcyVjA1dFVsSkphbUUyUWtsblpIcHpTREl2",
    "WlV0VlpUTlRRamgxYzBKSlRuaExSa2hXUzNCVVMwcEJObVIwUzFKTWIxb3ZURWs0T0Zkck1IQklVemhGVVRNMGNEWj",
    "NUMFpuUTNoNVVHNWlOV1ZDUjJ4NlZWTklTRzFpVUV4V2EyUjNibXhXV0VoWk9IQnNSalZrYjNwcmJXZHBVamRJUW05",
    "R0wxZFdSRFZ6ZUVwTVEydE9ZbTVSVEc5UFlYSnFVa3hCTVc1dFl6UnRWM0JRY1dKNk5sQm5iVk5EWlc1NGNHNUNkVU",
    "pQTkVjeGVVcGFVR0Z5TWxKdVZtaEpXRGx1WTFwMVNrMW5ZV3dpTENKbElqb2lRVkZCUWlJc0ltRnNaeUk2SWxKVE1q",
    "VTJJaXdpYTJsa0lqb2lRVVJWTGxOcFoyNXBibWN1TWpBeU5pMHdNUzB4TlNKOS5uZFBsSi1MWVNkY21sczAxWnhxMn",
    "dXbWpoZloyTEFtUlJqR19OSWZTbDkycDRrMjhJR3Uxd3JYZ1YtOHV2Q0VpZFJNUnZTU2k4T3RUV19VRU9DcHR4U21Y",
    "TFcydTNIOHhzRTBuUFR1WnBSVXB6Q3lpbmZyWjEyMU9LOXJ1MXM3aklwSy05UmFPcEc3ckpZQnl4U0g2cFpzMC1xQX",
    "k2OE84Y2lHSkphN1VwRzhvQ09YTUNlUldWYy1qcVJDSTdVVW5heVl6ZGl1eF9hTUw3QkVIQkIyUTZzWm1UWVp4MVlZ",
    "YXJoY0N5ZnpQYnVpNHVIemhMS05fWVpORUlBMUV1ZnZTVUJiT3NaNVA4cWhZTEQ3cHI4clFsQWhRa3Q0SmFCVzNldD",
    "RzdnVjTFRuNXh1N3FlbEE2al9hWnhqcnFacFlibmRtNnIxTEtsN3RvcVFqMGJvbUgtdXRDeXJudTYyeWxZNTZqTUdX",
    "NXpYSzRZOXRDR2Y5aHBIQWdLZ0RudTFuMXhuYWI4MWYtbWU2MEt4ZThZS2luN3ZzRkhyNzZtN1VJQW5VcjI2eXBENk",
    "FubU5mUFZnVXowZnN0ZnR1b2FNcHQ0ZWxRNW1WUGZMT2JJV3hMWlB0dFowd3YzdHYtZnZkdW1sdzdySnUwOFBMbmhQ",
    "akxXa0hRNE42b180ODAxc0x1YyJ9.eyJzaGEyNTYiOiJPOGhDbzE5SVFvd0pEWnkwbWtXNURUZGlpZjBiV0VsMWFDb",
    "mg4ZzhmRmRnPSJ9.FS46sAOF9B5Qtcg9quUlupO3sMTZkbT-HK8YICzbJX_9zQz9cb5jeRImbeqSex4imeFi6MRlcq",
    "G-aXXipOJta1zmQHi905k3sgaBfKAa71m5ftagVjRDXpHLdJUp1RsZgo1ts9uyfx8RPeSmuzGd4RPuXxgXA7mZ9M5r",
    "Aving3ldKud7QDAbAJnvDigsYQYfroVZVpDQttQUxrdrveR0VHmg27dIOxzHQ9NYH5u3BFcv1h5-04Z8xvp5T9V4SA",
    "whnKI8M-vBegnDZVP80mMT0MXT_7_RdtPamPQdUP4EFGshezE_mCPs3Mt4ACFSTTLLYv7qLkJQQ52bZq5-TdT8d3pU",
    "AaaagKzj3byxMY6zHl41oxv4oeiy_1fQy5xmQLwPN5DzuycGzHSBSrZHcMamqukXe-EDk5IV1eAD1RbtHVuwHqXD2U",
    "NKJeIbgBhDGa0UcsqEDnz1GHqKzw1qz9UIhRhtZh-ev7hiJ9np94GHr5j7GbqKsL49E4wg02XBYpvK",
);

pub(crate) const FIRMWARE: &[u8] = b"firmware-image-v1.2.0";
