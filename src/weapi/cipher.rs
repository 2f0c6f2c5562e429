// AES-128-CBC Block Cipher Codec
// PKCS#7 padded encryption with a fixed 16-byte block, used for both weapi stages

use aes::Aes128;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::error::{CodecError, Result};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const KEY_SIZE: usize = 16;

fn check_lengths(key: &[u8], iv: &[u8]) -> Result<()> {
    if key.len() != KEY_SIZE {
        return Err(CodecError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    if iv.len() != BLOCK_SIZE {
        return Err(CodecError::InvalidIvLength {
            expected: BLOCK_SIZE,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Encrypt `plaintext` with AES-128-CBC.
///
/// PKCS#7 always appends padding, so block-aligned input grows by a full
/// block. Returns raw ciphertext; Base64 is left to the caller.
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    check_lengths(key, iv)?;

    let encryptor = Aes128CbcEnc::new_from_slices(key, iv).map_err(|_| {
        CodecError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        }
    })?;

    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Inverse of [`encrypt`]: decrypts and strips PKCS#7 padding.
///
/// Ciphertext that is empty, not block-aligned, or ends in malformed
/// padding yields `InvalidPadding`.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_lengths(key, iv)?;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CodecError::InvalidPadding);
    }

    let decryptor = Aes128CbcDec::new_from_slices(key, iv).map_err(|_| {
        CodecError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        }
    })?;

    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CodecError::InvalidPadding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const KEY: &[u8; 16] = b"0CoJUm6Qyw8W8jud";
    const IV: &[u8; 16] = b"0102030405060708";

    #[test]
    fn test_nist_cbc_first_block() {
        // NIST SP 800-38A, F.2.1 CBC-AES128.Encrypt, block #1
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let ciphertext = encrypt(&key, &iv, &plaintext).unwrap();

        // aligned input gets a whole padding block
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(hex::encode(&ciphertext[..16]), "7649abac8119b246cee98e9b12e9197d");
    }

    #[test]
    fn test_empty_plaintext_is_one_padding_block() {
        let ciphertext = encrypt(KEY, IV, b"").unwrap();
        assert_eq!(ciphertext.len(), BLOCK_SIZE);
        assert_eq!(hex::encode(&ciphertext), "d714c95766463ee3c00d0667b559f0cc");
    }

    #[test]
    fn test_padding_lengths() {
        for len in 0..=48 {
            let plaintext = vec![b'x'; len];
            let ciphertext = encrypt(KEY, IV, &plaintext).unwrap();
            assert_eq!(ciphertext.len(), (len / BLOCK_SIZE + 1) * BLOCK_SIZE);
        }
    }

    #[test]
    fn test_roundtrip() {
        let messages: Vec<Vec<u8>> = vec![
            b"".to_vec(),
            b"A".to_vec(),
            b"exactly 16 bytes".to_vec(),
            b"{\"id\":\"347230\",\"lv\":-1}".to_vec(),
            vec![0u8; 100],
            (0..=255u8).collect(),
        ];

        for message in messages {
            let ciphertext = encrypt(KEY, IV, &message).unwrap();
            let decrypted = decrypt(KEY, IV, &ciphertext).unwrap();
            assert_eq!(message, decrypted);
        }
    }

    #[test]
    fn test_roundtrip_random_keys_and_ivs() {
        let mut rng = StdRng::seed_from_u64(0xae5);

        for _ in 0..200 {
            let key: [u8; KEY_SIZE] = rng.gen();
            let iv: [u8; BLOCK_SIZE] = rng.gen();
            let mut message = vec![0u8; rng.gen_range(0..80)];
            rng.fill(&mut message[..]);

            let ciphertext = encrypt(&key, &iv, &message).unwrap();
            assert_eq!(decrypt(&key, &iv, &ciphertext).unwrap(), message);
        }
    }

    #[test]
    fn test_invalid_key_length() {
        let result = encrypt(b"short", IV, b"data");
        assert!(matches!(
            result,
            Err(CodecError::InvalidKeyLength { expected: 16, actual: 5 })
        ));

        let result = decrypt(&[0u8; 32], IV, &[0u8; 16]);
        assert!(matches!(result, Err(CodecError::InvalidKeyLength { actual: 32, .. })));
    }

    #[test]
    fn test_invalid_iv_length() {
        let result = encrypt(KEY, b"0102", b"data");
        assert!(matches!(
            result,
            Err(CodecError::InvalidIvLength { expected: 16, actual: 4 })
        ));
    }

    #[test]
    fn test_decrypt_rejects_unaligned_or_empty() {
        assert!(matches!(decrypt(KEY, IV, &[]), Err(CodecError::InvalidPadding)));
        assert!(matches!(decrypt(KEY, IV, &[0u8; 17]), Err(CodecError::InvalidPadding)));
    }

    #[test]
    fn test_decrypt_rejects_malformed_padding() {
        // Encrypt a block whose final byte is 0x00 with no padding, so the
        // plaintext seen by decrypt ends in an impossible pad value.
        let mut block = [0x41u8; 16];
        block[15] = 0x00;
        let encryptor = Aes128CbcEnc::new_from_slices(KEY, IV).unwrap();
        let ciphertext =
            encryptor.encrypt_padded_vec_mut::<cbc::cipher::block_padding::NoPadding>(&block);

        assert!(matches!(decrypt(KEY, IV, &ciphertext), Err(CodecError::InvalidPadding)));
    }

    #[test]
    fn test_wrong_key_does_not_roundtrip() {
        let ciphertext = encrypt(KEY, IV, b"secret payload").unwrap();
        match decrypt(b"TA3YiYCfY2dDJQgg", IV, &ciphertext) {
            Ok(plaintext) => assert_ne!(plaintext, b"secret payload"),
            Err(e) => assert!(matches!(e, CodecError::InvalidPadding)),
        }
    }
}
