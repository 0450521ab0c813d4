//! Whole-message decodes over buffers shaped like real port-53 traffic.

use spyglass_dns_domain::{
    DecodeError, Opcode, RecordClass, RecordData, RecordType, ResponseCode,
};
use spyglass_dns_wire::MessageDecoder;

#[test]
fn test_decode_query_with_edns_additional() {
    let buf: Vec<u8> = vec![
        0x1a, 0x2b, // id
        0x01, 0x20, // rd, AD bit in Z
        0x00, 0x01, // qdcount
        0x00, 0x00, // ancount
        0x00, 0x00, // nscount
        0x00, 0x01, // arcount
        // question: example.com IN A
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
        0x03, b'c', b'o', b'm', 0x00, //
        0x00, 0x01, 0x00, 0x01, //
        // additional: EDNS0 OPT, udp payload 4096
        0x00, // root
        0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    let message = MessageDecoder::new().decode(&buf).unwrap();
    assert_eq!(message.header.id, 0x1a2b);
    assert!(!message.header.response);
    assert_eq!(message.header.opcode, Opcode::Query);
    assert!(message.header.recursion_desired);

    let question = &message.questions[0];
    assert_eq!(format!("{}", question.name), "example.com");
    assert_eq!(question.record_type, RecordType::A);
    assert_eq!(question.class, RecordClass::In);

    let opt = &message.additionals[0];
    assert!(opt.name.is_root());
    assert_eq!(opt.record_type, RecordType::OPT);
    assert_eq!(opt.class, RecordClass::Unknown(4096));
    assert_eq!(opt.data, RecordData::Opaque(Vec::new()));
}

#[test]
fn test_decode_response_with_two_compressed_answers() {
    let buf: Vec<u8> = vec![
        0x1a, 0x2b, // id
        0x81, 0x80, // qr rd ra, NOERROR
        0x00, 0x01, // qdcount
        0x00, 0x02, // ancount
        0x00, 0x00, // nscount
        0x00, 0x00, // arcount
        // question: example.com IN A
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
        0x03, b'c', b'o', b'm', 0x00, //
        0x00, 0x01, 0x00, 0x01, //
        // answer 1: name via pointer to offset 12
        0xc0, 0x0c, //
        0x00, 0x01, 0x00, 0x01, // A IN
        0x00, 0x00, 0x01, 0x2c, // ttl 300
        0x00, 0x04, 0x5d, 0xb8, 0xd8, 0x22, // 93.184.216.34
        // answer 2
        0xc0, 0x0c, //
        0x00, 0x01, 0x00, 0x01, //
        0x00, 0x00, 0x01, 0x2c, //
        0x00, 0x04, 0x5d, 0xb8, 0xd8, 0x23, // 93.184.216.35
    ];

    let message = MessageDecoder::new().decode(&buf).unwrap();
    assert!(message.header.response);
    assert_eq!(message.header.response_code, ResponseCode::NoError);
    assert_eq!(message.header.answer_count, 2);
    assert_eq!(message.answers.len(), 2);

    for answer in &message.answers {
        assert_eq!(format!("{}", answer.name), "example.com");
        assert_eq!(answer.ttl, 300);
    }
    assert_eq!(message.answers[0].data, RecordData::A("93.184.216.34".parse().unwrap()));
    assert_eq!(message.answers[1].data, RecordData::A("93.184.216.35".parse().unwrap()));
}

#[test]
fn test_decode_response_with_cname_chain() {
    let buf: Vec<u8> = vec![
        0x00, 0x42, // id
        0x81, 0x80, // qr rd ra
        0x00, 0x01, // qdcount
        0x00, 0x02, // ancount
        0x00, 0x00, // nscount
        0x00, 0x00, // arcount
        // question: www.example.com IN A (name at 12, "example.com" at 16)
        0x03, b'w', b'w', b'w', //
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
        0x03, b'c', b'o', b'm', 0x00, //
        0x00, 0x01, 0x00, 0x01, //
        // answer 1: www.example.com CNAME example.com (rdata compressed)
        0xc0, 0x0c, //
        0x00, 0x05, 0x00, 0x01, // CNAME IN
        0x00, 0x00, 0x0e, 0x10, // ttl 3600
        0x00, 0x02, 0xc0, 0x10, //
        // answer 2: example.com A 93.184.216.34
        0xc0, 0x10, //
        0x00, 0x01, 0x00, 0x01, //
        0x00, 0x00, 0x01, 0x2c, //
        0x00, 0x04, 0x5d, 0xb8, 0xd8, 0x22,
    ];

    let message = MessageDecoder::new().decode(&buf).unwrap();
    assert_eq!(message.answers.len(), 2);

    let cname = &message.answers[0];
    assert_eq!(format!("{}", cname.name), "www.example.com");
    assert_eq!(cname.record_type, RecordType::CNAME);
    match &cname.data {
        RecordData::CanonicalName(name) => assert_eq!(format!("{}", name), "example.com"),
        other => panic!("Expected CanonicalName, got {:?}", other),
    }

    let address = &message.answers[1];
    assert_eq!(format!("{}", address.name), "example.com");
    assert_eq!(address.record_type, RecordType::A);
    assert_eq!(format!("{}", address.data), "93.184.216.34");
}

#[test]
fn test_decode_nxdomain_with_soa_authority() {
    let buf: Vec<u8> = vec![
        0x99, 0x99, // id
        0x81, 0x83, // qr rd ra, NXDOMAIN
        0x00, 0x01, // qdcount
        0x00, 0x00, // ancount
        0x00, 0x01, // nscount
        0x00, 0x00, // arcount
        // question: example.com IN A
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
        0x03, b'c', b'o', b'm', 0x00, //
        0x00, 0x01, 0x00, 0x01, //
        // authority: example.com SOA (rdata opaque to this decoder)
        0xc0, 0x0c, //
        0x00, 0x06, 0x00, 0x01, // SOA IN
        0x00, 0x00, 0x03, 0x84, // ttl 900
        0x00, 0x27, // rdlength 39
        0x03, b'n', b's', b'1', 0xc0, 0x0c, // mname ns1.example.com
        0x0a, b'h', b'o', b's', b't', b'm', b'a', b's', b't', b'e', b'r', 0xc0, 0x0c, // rname
        0x78, 0x49, 0x23, 0x01, // serial
        0x00, 0x00, 0x1c, 0x20, // refresh
        0x00, 0x00, 0x0e, 0x10, // retry
        0x00, 0x12, 0x75, 0x00, // expire
        0x00, 0x00, 0x03, 0x84, // minimum
    ];

    let message = MessageDecoder::new().decode(&buf).unwrap();
    assert_eq!(message.header.response_code, ResponseCode::NxDomain);
    assert!(message.header.response_code.is_error());
    assert!(message.answers.is_empty());

    let soa = &message.authorities[0];
    assert_eq!(format!("{}", soa.name), "example.com");
    assert_eq!(soa.record_type, RecordType::SOA);
    match &soa.data {
        RecordData::Opaque(bytes) => assert_eq!(bytes.len(), 39),
        other => panic!("Expected Opaque data, got {:?}", other),
    }
}

#[test]
fn test_hostile_self_pointer_rejected_without_hanging() {
    let buf: Vec<u8> = vec![
        0xde, 0xad, // id
        0x01, 0x00, // rd
        0x00, 0x01, // qdcount
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        // question name: pointer at offset 12 targeting offset 12
        0xc0, 0x0c, //
        0x00, 0x01, 0x00, 0x01,
    ];

    let err = MessageDecoder::new().decode(&buf).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedName(_)));
}

#[test]
fn test_hostile_counts_with_empty_body_rejected() {
    let buf: Vec<u8> = vec![
        0xfe, 0xed, // id
        0x81, 0x80, // qr rd ra
        0x00, 0x04, // qdcount 4
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    let err = MessageDecoder::new().decode(&buf).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedMessage(_)));
}
