use sha2::{Digest, Sha256};
use uuid::Uuid;

/// `salt$hex(sha256(salt || password))` 형태로 저장
///
/// 한 번만 해싱하는 빠른 해시라 오프라인 대입 공격에 약하다.
/// 운영 환경이라면 argon2 같은 느린 KDF 로 바꿔야 한다.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

/// 저장된 해시와 비밀번호 비교
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
