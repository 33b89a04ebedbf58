use std::net::{Ipv4Addr, Ipv6Addr};

use crate::errors::ValidationError;
use crate::validation::{Validated, ValidationResult};

/// Syntactic validation of IP address strings for DNS record fields
/// (A/AAAA content, glue records, multi-valued record sets).
///
/// Validation is parse-based: a string is valid exactly when the standard
/// library accepts it as a dotted-quad or colon-hex literal. No reachability
/// or resolution checks.
pub struct IpAddressValidator;

impl IpAddressValidator {
    pub fn validate_ipv4(value: &str) -> ValidationResult<String> {
        if value.parse::<Ipv4Addr>().is_ok() {
            Ok(Validated::new(value.to_string()))
        } else {
            Err(ValidationError::InvalidIpv4(value.to_string()).into())
        }
    }

    pub fn validate_ipv6(value: &str) -> ValidationResult<String> {
        if value.parse::<Ipv6Addr>().is_ok() {
            Ok(Validated::new(value.to_string()))
        } else {
            Err(ValidationError::InvalidIpv6(value.to_string()).into())
        }
    }

    /// Validates a comma-separated list of IP addresses, each entry either
    /// family. Returns the trimmed entries in input order; the first entry
    /// that is neither IPv4 nor IPv6 fails the whole list.
    pub fn validate_multiple(value: &str) -> ValidationResult<Vec<String>> {
        let mut addresses = Vec::new();

        for entry in value.split(',') {
            let entry = entry.trim();
            if !Self::is_ip_literal(entry) {
                return Err(ValidationError::InvalidIpAddress(entry.to_string()).into());
            }
            addresses.push(entry.to_string());
        }

        Ok(Validated::new(addresses))
    }

    fn is_ip_literal(value: &str) -> bool {
        value.parse::<Ipv4Addr>().is_ok() || value.parse::<Ipv6Addr>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ipv4_accepts_dotted_quad() {
        for ip in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "10.0.0.1"] {
            let result = IpAddressValidator::validate_ipv4(ip).unwrap();
            assert_eq!(result.value, ip);
            assert!(!result.has_warnings());
        }
    }

    #[test]
    fn test_validate_ipv4_rejects_out_of_range_octet() {
        assert!(IpAddressValidator::validate_ipv4("192.168.1.256").is_err());
    }

    #[test]
    fn test_validate_ipv4_rejects_ipv6() {
        assert!(IpAddressValidator::validate_ipv4("2001:db8::1").is_err());
    }

    #[test]
    fn test_validate_ipv6_accepts_compressed_form() {
        for ip in ["::1", "2001:db8::1", "fe80::1", "::"] {
            let result = IpAddressValidator::validate_ipv6(ip).unwrap();
            assert_eq!(result.value, ip);
        }
    }

    #[test]
    fn test_validate_ipv6_rejects_ipv4() {
        assert!(IpAddressValidator::validate_ipv6("192.168.1.1").is_err());
    }

    #[test]
    fn test_empty_string_is_invalid_everywhere() {
        assert!(IpAddressValidator::validate_ipv4("").is_err());
        assert!(IpAddressValidator::validate_ipv6("").is_err());
        assert!(IpAddressValidator::validate_multiple("").is_err());
    }

    #[test]
    fn test_validate_multiple_trims_and_preserves_order() {
        let result =
            IpAddressValidator::validate_multiple("192.168.1.1, 10.0.0.1").unwrap();
        assert_eq!(result.value, vec!["192.168.1.1", "10.0.0.1"]);
    }

    #[test]
    fn test_validate_multiple_single_entry() {
        let result = IpAddressValidator::validate_multiple("2001:db8::1").unwrap();
        assert_eq!(result.value, vec!["2001:db8::1"]);
    }

    #[test]
    fn test_validate_multiple_short_circuits_on_first_invalid() {
        let err =
            IpAddressValidator::validate_multiple("192.168.1.1, invalid_ip").unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.messages()[0].contains("invalid_ip"));
    }
}
