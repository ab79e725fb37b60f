//! JSON Web Key Set 모델

use serde::{Deserialize, Serialize};

/// JWKS 엔드포인트가 반환하는 개별 공개 키
///
/// RSA 키만 검증에 사용하며 `n`(modulus), `e`(exponent)는 base64url 인코딩된
/// 빅엔디언 부호 없는 정수입니다. EC 등 다른 종류의 키가 섞여 있어도
/// 세트 전체는 파싱되도록 두 값은 선택 필드입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(rename = "use", default)]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

/// `{ "keys": [...] }` 형태의 키 세트
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// `kid`가 일치하는 키를 찾습니다.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}
