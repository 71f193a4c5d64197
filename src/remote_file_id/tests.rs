#[cfg(test)]
mod remote_file_id_tests {
    mod decode_tests {
        use crate::remote_file_id::errors::RemoteFileIdError;
        use crate::remote_file_id::structs::remote_file_id::RemoteFileId;

        #[test]
        fn test_decode_splits_on_first_delimiter() {
            let id = RemoteFileId::decode("group1/M00/00/00/abc.txt").unwrap();
            assert_eq!(id.group, "group1");
            assert_eq!(id.path, "M00/00/00/abc.txt");
        }

        #[test]
        fn test_decode_round_trip() {
            let encoded = RemoteFileId::encode("group1", "M00/00/00/abc.txt");
            let id = RemoteFileId::decode(&encoded).unwrap();
            assert_eq!(id, RemoteFileId::new("group1", "M00/00/00/abc.txt"));
        }

        #[test]
        fn test_decode_without_delimiter_fails() {
            let result = RemoteFileId::decode("no-delimiter-here");
            assert_eq!(result, Err(RemoteFileIdError::InvalidRemoteFileId("no-delimiter-here".to_string())));
        }

        #[test]
        fn test_decode_empty_fails() {
            assert!(matches!(RemoteFileId::decode(""), Err(RemoteFileIdError::InvalidRemoteFileId(_))));
        }

        #[test]
        fn test_decode_empty_components_fail() {
            assert!(RemoteFileId::decode("/").is_err());
            assert!(RemoteFileId::decode("group1/").is_err());
            assert!(RemoteFileId::decode("/M00/00/00/abc.txt").is_err());
        }

        #[test]
        fn test_backslash_is_not_a_delimiter() {
            assert!(RemoteFileId::decode("group1\\M00\\abc.txt").is_err());
        }
    }

    mod conversion_tests {
        use std::str::FromStr;
        use crate::remote_file_id::structs::remote_file_id::RemoteFileId;

        #[test]
        fn test_display_matches_encode() {
            let id = RemoteFileId::new("group2", "M01/0A/FF/xyz");
            assert_eq!(id.to_string(), RemoteFileId::encode("group2", "M01/0A/FF/xyz"));
        }

        #[test]
        fn test_from_str() {
            let id = RemoteFileId::from_str("group2/M01/0A/FF/xyz").unwrap();
            assert_eq!(id.group, "group2");
        }
    }

    mod property_tests {
        use proptest::prelude::*;
        use crate::remote_file_id::structs::remote_file_id::RemoteFileId;

        proptest! {
            #[test]
            fn decode_inverts_encode(group in "[a-zA-Z0-9_]{1,16}", path in "[a-zA-Z0-9_./]{1,64}") {
                let id = RemoteFileId::decode(&RemoteFileId::encode(&group, &path)).unwrap();
                prop_assert_eq!(id.group, group);
                prop_assert_eq!(id.path, path);
            }

            #[test]
            fn decode_rejects_strings_without_delimiter(value in "[^/]*") {
                prop_assert!(RemoteFileId::decode(&value).is_err());
            }
        }
    }
}
