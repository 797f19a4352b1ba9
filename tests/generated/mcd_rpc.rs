// @generated by mcdgen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_mut, unused_variables)]

pub const MCD_API_IMP_DATE_LEN: u64 = 16;
pub const MCD_API_IMP_VENDOR_LEN: u64 = 32;
pub const MCD_HOSTNAME_LEN: u64 = 64;
pub const MCD_INFO_STR_LEN: u64 = 256;
pub const MCD_KEY_LEN: u64 = 64;
pub const MCD_RET_ACT_NONE: u64 = 0;
pub const MCD_UNIQUE_NAME_LEN: u64 = 64;

pub type uint8_t = u8;
pub type uint16_t = u16;
pub type uint32_t = u32;
pub type uint64_t = u64;
pub type mcd_char_t = u8;
pub type mcd_bool_t = u32;
pub type mcd_return_et = u32;
pub type mcd_addr_space_type_et = u32;
pub type mcd_tx_access_type_et = u32;
pub type mcd_tx_access_opt_et = u32;
pub type mcd_trig_type_et = u32;
pub type mcd_trig_opt_et = u32;
pub type mcd_trig_action_et = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_api_version_st {
    pub v_api_major: uint16_t,
    pub v_api_minor: uint16_t,
    pub author: [mcd_char_t; 32],
}

impl Default for mcd_api_version_st {
    fn default() -> Self {
        mcd_api_version_st {
            v_api_major: 0,
            v_api_minor: 0,
            author: [0; 32],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_impl_version_info_st {
    pub v_api: mcd_api_version_st,
    pub v_imp_major: uint16_t,
    pub v_imp_minor: uint16_t,
    pub v_imp_build: uint16_t,
    pub vendor: [mcd_char_t; 32],
    pub date: [mcd_char_t; 16],
}

impl Default for mcd_impl_version_info_st {
    fn default() -> Self {
        mcd_impl_version_info_st {
            v_api: Default::default(),
            v_imp_major: 0,
            v_imp_minor: 0,
            v_imp_build: 0,
            vendor: [0; 32],
            date: [0; 16],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_server_info_st {
    pub server: [mcd_char_t; 64],
    pub system_instance: [mcd_char_t; 64],
    pub acc_hw: [mcd_char_t; 64],
}

impl Default for mcd_server_info_st {
    fn default() -> Self {
        mcd_server_info_st {
            server: [0; 64],
            system_instance: [0; 64],
            acc_hw: [0; 64],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_addr_st {
    pub address: uint64_t,
    pub mem_space_id: uint32_t,
    pub addr_space_id: uint32_t,
    pub addr_space_type: mcd_addr_space_type_et,
}

impl Default for mcd_addr_st {
    fn default() -> Self {
        mcd_addr_st {
            address: 0,
            mem_space_id: 0,
            addr_space_id: 0,
            addr_space_type: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_trig_info_st {
    pub r#type: mcd_trig_type_et,
    pub option: mcd_trig_opt_et,
    pub action: mcd_trig_action_et,
    pub trig_number: uint32_t,
    pub state_number: uint32_t,
    pub counter_number: uint32_t,
    pub sw_breakpoints: mcd_bool_t,
}

impl Default for mcd_trig_info_st {
    fn default() -> Self {
        mcd_trig_info_st {
            r#type: 0,
            option: 0,
            action: 0,
            trig_number: 0,
            state_number: 0,
            counter_number: 0,
            sw_breakpoints: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_trig_simple_core_st {
    pub struct_size: uint32_t,
    pub r#type: mcd_trig_type_et,
    pub option: mcd_trig_opt_et,
    pub action: mcd_trig_action_et,
    pub action_param: uint32_t,
    pub modified: mcd_bool_t,
    pub state_mask: uint32_t,
    pub addr_start: mcd_addr_st,
    pub addr_range: uint64_t,
}

impl Default for mcd_trig_simple_core_st {
    fn default() -> Self {
        mcd_trig_simple_core_st {
            struct_size: 0,
            r#type: 0,
            option: 0,
            action: 0,
            action_param: 0,
            modified: 0,
            state_mask: 0,
            addr_start: Default::default(),
            addr_range: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_tx_st {
    pub addr: mcd_addr_st,
    pub access_type: mcd_tx_access_type_et,
    pub options: mcd_tx_access_opt_et,
    pub access_width: uint8_t,
    pub core_mode: uint8_t,
    pub data: Vec<uint8_t>,
    pub num_bytes: uint32_t,
    pub num_bytes_ok: uint32_t,
}

impl Default for mcd_tx_st {
    fn default() -> Self {
        mcd_tx_st {
            addr: Default::default(),
            access_type: 0,
            options: 0,
            access_width: 0,
            core_mode: 0,
            data: Vec::new(),
            num_bytes: 0,
            num_bytes_ok: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_txlist_st {
    pub tx: Vec<mcd_tx_st>,
    pub num_tx: uint32_t,
    pub num_tx_ok: uint32_t,
}

impl Default for mcd_txlist_st {
    fn default() -> Self {
        mcd_txlist_st {
            tx: Vec::new(),
            num_tx: 0,
            num_tx_ok: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_initialize_args {
    pub version_req: mcd_api_version_st,
}

impl Default for mcd_initialize_args {
    fn default() -> Self {
        mcd_initialize_args {
            version_req: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_initialize_result {
    pub ret: mcd_return_et,
    pub impl_info: mcd_impl_version_info_st,
}

impl Default for mcd_initialize_result {
    fn default() -> Self {
        mcd_initialize_result {
            ret: 0,
            impl_info: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_qry_servers_args {
    pub host_len: uint32_t,
    pub host: Vec<mcd_char_t>,
    pub running: mcd_bool_t,
    pub start_index: uint32_t,
    pub num_servers: uint32_t,
}

impl Default for mcd_qry_servers_args {
    fn default() -> Self {
        mcd_qry_servers_args {
            host_len: 0,
            host: Vec::new(),
            running: 0,
            start_index: 0,
            num_servers: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_qry_servers_result {
    pub ret: mcd_return_et,
    pub num_servers: uint32_t,
    pub server_info_len: uint32_t,
    pub server_info: Vec<mcd_server_info_st>,
}

impl Default for mcd_qry_servers_result {
    fn default() -> Self {
        mcd_qry_servers_result {
            ret: 0,
            num_servers: 0,
            server_info_len: 0,
            server_info: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_qry_trig_info_result {
    pub ret: mcd_return_et,
    pub trig_info: mcd_trig_info_st,
}

impl Default for mcd_qry_trig_info_result {
    fn default() -> Self {
        mcd_qry_trig_info_result {
            ret: 0,
            trig_info: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_rpc_trig_st {
    pub is_simple_core: uint8_t,
    pub simple_core: mcd_trig_simple_core_st,
}

impl Default for mcd_rpc_trig_st {
    fn default() -> Self {
        mcd_rpc_trig_st {
            is_simple_core: 0,
            simple_core: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_qry_trig_set_result {
    pub ret: mcd_return_et,
    pub num_trigs: uint32_t,
    pub trig_ids_len: uint32_t,
    pub trig_ids: Vec<uint32_t>,
}

impl Default for mcd_qry_trig_set_result {
    fn default() -> Self {
        mcd_qry_trig_set_result {
            ret: 0,
            num_trigs: 0,
            trig_ids_len: 0,
            trig_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_execute_txlist_args {
    pub core_uid: uint32_t,
    pub txlist: mcd_txlist_st,
}

impl Default for mcd_execute_txlist_args {
    fn default() -> Self {
        mcd_execute_txlist_args {
            core_uid: 0,
            txlist: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_execute_txlist_result {
    pub ret: mcd_return_et,
    pub txlist: mcd_txlist_st,
}

impl Default for mcd_execute_txlist_result {
    fn default() -> Self {
        mcd_execute_txlist_result {
            ret: 0,
            txlist: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct mcd_run_args {
    pub core_uid: uint32_t,
    pub global: mcd_bool_t,
}

impl Default for mcd_run_args {
    fn default() -> Self {
        mcd_run_args {
            core_uid: 0,
            global: 0,
        }
    }
}

fn wire_put_u8(v: u8, buf: &mut [u8]) -> usize {
    buf[0] = v;
    1
}

fn wire_get_u8(buf: &[u8], v: &mut u8) -> usize {
    *v = buf[0];
    1
}

fn wire_put_u32(v: u32, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&v.to_le_bytes());
    4
}

fn wire_get_u32(buf: &[u8], v: &mut u32) -> usize {
    *v = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    4
}

pub fn marshal_uint8_t(obj: uint8_t, buf: &mut [u8]) -> usize {
    buf[..1].copy_from_slice(&obj.to_le_bytes());
    1
}

pub fn unmarshal_uint8_t(buf: &[u8], obj: &mut uint8_t) -> usize {
    let mut b = [0u8; 1];
    b.copy_from_slice(&buf[..1]);
    *obj = u8::from_le_bytes(b);
    1
}

pub fn marshal_uint16_t(obj: uint16_t, buf: &mut [u8]) -> usize {
    buf[..2].copy_from_slice(&obj.to_le_bytes());
    2
}

pub fn unmarshal_uint16_t(buf: &[u8], obj: &mut uint16_t) -> usize {
    let mut b = [0u8; 2];
    b.copy_from_slice(&buf[..2]);
    *obj = u16::from_le_bytes(b);
    2
}

pub fn marshal_uint32_t(obj: uint32_t, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_uint32_t(buf: &[u8], obj: &mut uint32_t) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_uint64_t(obj: uint64_t, buf: &mut [u8]) -> usize {
    buf[..8].copy_from_slice(&obj.to_le_bytes());
    8
}

pub fn unmarshal_uint64_t(buf: &[u8], obj: &mut uint64_t) -> usize {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[..8]);
    *obj = u64::from_le_bytes(b);
    8
}

pub fn marshal_mcd_char_t(obj: mcd_char_t, buf: &mut [u8]) -> usize {
    buf[..1].copy_from_slice(&obj.to_le_bytes());
    1
}

pub fn unmarshal_mcd_char_t(buf: &[u8], obj: &mut mcd_char_t) -> usize {
    let mut b = [0u8; 1];
    b.copy_from_slice(&buf[..1]);
    *obj = u8::from_le_bytes(b);
    1
}

pub fn marshal_mcd_bool_t(obj: mcd_bool_t, buf: &mut [u8]) -> usize {
    wire_put_u8(if obj != 0 { 1 } else { 0 }, buf)
}

pub fn unmarshal_mcd_bool_t(buf: &[u8], obj: &mut mcd_bool_t) -> usize {
    let mut b = 0u8;
    let len = wire_get_u8(buf, &mut b);
    *obj = if b != 0 { 1 } else { 0 };
    len
}

pub fn marshal_mcd_return_et(obj: mcd_return_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_return_et(buf: &[u8], obj: &mut mcd_return_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_addr_space_type_et(obj: mcd_addr_space_type_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_addr_space_type_et(buf: &[u8], obj: &mut mcd_addr_space_type_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_tx_access_type_et(obj: mcd_tx_access_type_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_tx_access_type_et(buf: &[u8], obj: &mut mcd_tx_access_type_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_tx_access_opt_et(obj: mcd_tx_access_opt_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_tx_access_opt_et(buf: &[u8], obj: &mut mcd_tx_access_opt_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_trig_type_et(obj: mcd_trig_type_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_trig_type_et(buf: &[u8], obj: &mut mcd_trig_type_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_trig_opt_et(obj: mcd_trig_opt_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_trig_opt_et(buf: &[u8], obj: &mut mcd_trig_opt_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_trig_action_et(obj: mcd_trig_action_et, buf: &mut [u8]) -> usize {
    buf[..4].copy_from_slice(&obj.to_le_bytes());
    4
}

pub fn unmarshal_mcd_trig_action_et(buf: &[u8], obj: &mut mcd_trig_action_et) -> usize {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[..4]);
    *obj = u32::from_le_bytes(b);
    4
}

pub fn marshal_mcd_api_version_st(obj: &mcd_api_version_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint16_t(obj.v_api_major, &mut buf[pos..]);
    pos += marshal_uint16_t(obj.v_api_minor, &mut buf[pos..]);
    pos += wire_put_u32(32, &mut buf[pos..]);
    for i in 0..32 {
        pos += marshal_mcd_char_t(obj.author[i], &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_api_version_st(buf: &[u8], obj: &mut mcd_api_version_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint16_t(&buf[pos..], &mut obj.v_api_major);
    pos += unmarshal_uint16_t(&buf[pos..], &mut obj.v_api_minor);
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.author[i]);
        }
        for i in n as usize..32 {
            obj.author[i] = Default::default();
        }
    }
    pos
}

pub fn marshal_mcd_impl_version_info_st(obj: &mcd_impl_version_info_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_api_version_st(&obj.v_api, &mut buf[pos..]);
    pos += marshal_uint16_t(obj.v_imp_major, &mut buf[pos..]);
    pos += marshal_uint16_t(obj.v_imp_minor, &mut buf[pos..]);
    pos += marshal_uint16_t(obj.v_imp_build, &mut buf[pos..]);
    pos += wire_put_u32(32, &mut buf[pos..]);
    for i in 0..32 {
        pos += marshal_mcd_char_t(obj.vendor[i], &mut buf[pos..]);
    }
    pos += wire_put_u32(16, &mut buf[pos..]);
    for i in 0..16 {
        pos += marshal_mcd_char_t(obj.date[i], &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_impl_version_info_st(buf: &[u8], obj: &mut mcd_impl_version_info_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_api_version_st(&buf[pos..], &mut obj.v_api);
    pos += unmarshal_uint16_t(&buf[pos..], &mut obj.v_imp_major);
    pos += unmarshal_uint16_t(&buf[pos..], &mut obj.v_imp_minor);
    pos += unmarshal_uint16_t(&buf[pos..], &mut obj.v_imp_build);
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.vendor[i]);
        }
        for i in n as usize..32 {
            obj.vendor[i] = Default::default();
        }
    }
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.date[i]);
        }
        for i in n as usize..16 {
            obj.date[i] = Default::default();
        }
    }
    pos
}

pub fn marshal_mcd_server_info_st(obj: &mcd_server_info_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += wire_put_u32(64, &mut buf[pos..]);
    for i in 0..64 {
        pos += marshal_mcd_char_t(obj.server[i], &mut buf[pos..]);
    }
    pos += wire_put_u32(64, &mut buf[pos..]);
    for i in 0..64 {
        pos += marshal_mcd_char_t(obj.system_instance[i], &mut buf[pos..]);
    }
    pos += wire_put_u32(64, &mut buf[pos..]);
    for i in 0..64 {
        pos += marshal_mcd_char_t(obj.acc_hw[i], &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_server_info_st(buf: &[u8], obj: &mut mcd_server_info_st) -> usize {
    let mut pos = 0;
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.server[i]);
        }
        for i in n as usize..64 {
            obj.server[i] = Default::default();
        }
    }
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.system_instance[i]);
        }
        for i in n as usize..64 {
            obj.system_instance[i] = Default::default();
        }
    }
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.acc_hw[i]);
        }
        for i in n as usize..64 {
            obj.acc_hw[i] = Default::default();
        }
    }
    pos
}

pub fn marshal_mcd_addr_st(obj: &mcd_addr_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint64_t(obj.address, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.mem_space_id, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.addr_space_id, &mut buf[pos..]);
    pos += marshal_mcd_addr_space_type_et(obj.addr_space_type, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_addr_st(buf: &[u8], obj: &mut mcd_addr_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint64_t(&buf[pos..], &mut obj.address);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.mem_space_id);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.addr_space_id);
    pos += unmarshal_mcd_addr_space_type_et(&buf[pos..], &mut obj.addr_space_type);
    pos
}

pub fn marshal_mcd_trig_info_st(obj: &mcd_trig_info_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_trig_type_et(obj.r#type, &mut buf[pos..]);
    pos += marshal_mcd_trig_opt_et(obj.option, &mut buf[pos..]);
    pos += marshal_mcd_trig_action_et(obj.action, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.trig_number, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.state_number, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.counter_number, &mut buf[pos..]);
    pos += marshal_mcd_bool_t(obj.sw_breakpoints, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_trig_info_st(buf: &[u8], obj: &mut mcd_trig_info_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_trig_type_et(&buf[pos..], &mut obj.r#type);
    pos += unmarshal_mcd_trig_opt_et(&buf[pos..], &mut obj.option);
    pos += unmarshal_mcd_trig_action_et(&buf[pos..], &mut obj.action);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.trig_number);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.state_number);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.counter_number);
    pos += unmarshal_mcd_bool_t(&buf[pos..], &mut obj.sw_breakpoints);
    pos
}

pub fn marshal_mcd_trig_simple_core_st(obj: &mcd_trig_simple_core_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint32_t(obj.struct_size, &mut buf[pos..]);
    pos += marshal_mcd_trig_type_et(obj.r#type, &mut buf[pos..]);
    pos += marshal_mcd_trig_opt_et(obj.option, &mut buf[pos..]);
    pos += marshal_mcd_trig_action_et(obj.action, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.action_param, &mut buf[pos..]);
    pos += marshal_mcd_bool_t(obj.modified, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.state_mask, &mut buf[pos..]);
    pos += marshal_mcd_addr_st(&obj.addr_start, &mut buf[pos..]);
    pos += marshal_uint64_t(obj.addr_range, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_trig_simple_core_st(buf: &[u8], obj: &mut mcd_trig_simple_core_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.struct_size);
    pos += unmarshal_mcd_trig_type_et(&buf[pos..], &mut obj.r#type);
    pos += unmarshal_mcd_trig_opt_et(&buf[pos..], &mut obj.option);
    pos += unmarshal_mcd_trig_action_et(&buf[pos..], &mut obj.action);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.action_param);
    pos += unmarshal_mcd_bool_t(&buf[pos..], &mut obj.modified);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.state_mask);
    pos += unmarshal_mcd_addr_st(&buf[pos..], &mut obj.addr_start);
    pos += unmarshal_uint64_t(&buf[pos..], &mut obj.addr_range);
    pos
}

pub fn marshal_mcd_tx_st(obj: &mcd_tx_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_addr_st(&obj.addr, &mut buf[pos..]);
    pos += marshal_mcd_tx_access_type_et(obj.access_type, &mut buf[pos..]);
    pos += marshal_mcd_tx_access_opt_et(obj.options, &mut buf[pos..]);
    pos += marshal_uint8_t(obj.access_width, &mut buf[pos..]);
    pos += marshal_uint8_t(obj.core_mode, &mut buf[pos..]);
    {
        let n = (obj.num_bytes as u64) as u32;
        pos += wire_put_u32(n, &mut buf[pos..]);
        for i in 0..n as usize {
            pos += marshal_uint8_t(obj.data[i], &mut buf[pos..]);
        }
    }
    pos += marshal_uint32_t(obj.num_bytes, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.num_bytes_ok, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_tx_st(buf: &[u8], obj: &mut mcd_tx_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_addr_st(&buf[pos..], &mut obj.addr);
    pos += unmarshal_mcd_tx_access_type_et(&buf[pos..], &mut obj.access_type);
    pos += unmarshal_mcd_tx_access_opt_et(&buf[pos..], &mut obj.options);
    pos += unmarshal_uint8_t(&buf[pos..], &mut obj.access_width);
    pos += unmarshal_uint8_t(&buf[pos..], &mut obj.core_mode);
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        obj.data = if n == 0 {
            Vec::new()
        } else {
            (0..n).map(|_| Default::default()).collect()
        };
        for i in 0..n as usize {
            pos += unmarshal_uint8_t(&buf[pos..], &mut obj.data[i]);
        }
    }
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_bytes);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_bytes_ok);
    pos
}

pub fn free_mcd_tx_st(obj: &mut mcd_tx_st) {
    obj.data = Vec::new();
}

pub fn marshal_mcd_txlist_st(obj: &mcd_txlist_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    {
        let n = (obj.num_tx as u64) as u32;
        pos += wire_put_u32(n, &mut buf[pos..]);
        for i in 0..n as usize {
            pos += marshal_mcd_tx_st(&obj.tx[i], &mut buf[pos..]);
        }
    }
    pos += marshal_uint32_t(obj.num_tx, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.num_tx_ok, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_txlist_st(buf: &[u8], obj: &mut mcd_txlist_st) -> usize {
    let mut pos = 0;
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        obj.tx = if n == 0 {
            Vec::new()
        } else {
            (0..n).map(|_| Default::default()).collect()
        };
        for i in 0..n as usize {
            pos += unmarshal_mcd_tx_st(&buf[pos..], &mut obj.tx[i]);
        }
    }
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_tx);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_tx_ok);
    pos
}

pub fn free_mcd_txlist_st(obj: &mut mcd_txlist_st) {
    {
        let n = (obj.num_tx as u64) as usize;
        for i in 0..n.min(obj.tx.len()) {
            free_mcd_tx_st(&mut obj.tx[i]);
        }
    }
    obj.tx = Vec::new();
}

pub fn marshal_mcd_initialize_args(obj: &mcd_initialize_args, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_api_version_st(&obj.version_req, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_initialize_args(buf: &[u8], obj: &mut mcd_initialize_args) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_api_version_st(&buf[pos..], &mut obj.version_req);
    pos
}

pub fn marshal_mcd_initialize_result(obj: &mcd_initialize_result, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_return_et(obj.ret, &mut buf[pos..]);
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_mcd_impl_version_info_st(&obj.impl_info, &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_initialize_result(buf: &[u8], obj: &mut mcd_initialize_result) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_return_et(&buf[pos..], &mut obj.ret);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_mcd_impl_version_info_st(&buf[pos..], &mut obj.impl_info);
    } else {
        obj.impl_info = Default::default();
    }
    pos
}

pub fn marshal_mcd_qry_servers_args(obj: &mcd_qry_servers_args, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint32_t(obj.host_len, &mut buf[pos..]);
    {
        let n = (obj.host_len as u64) as u32;
        pos += wire_put_u32(n, &mut buf[pos..]);
        for i in 0..n as usize {
            pos += marshal_mcd_char_t(obj.host[i], &mut buf[pos..]);
        }
    }
    pos += marshal_mcd_bool_t(obj.running, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.start_index, &mut buf[pos..]);
    pos += marshal_uint32_t(obj.num_servers, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_qry_servers_args(buf: &[u8], obj: &mut mcd_qry_servers_args) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.host_len);
    {
        let mut n = 0u32;
        pos += wire_get_u32(&buf[pos..], &mut n);
        obj.host = if n == 0 {
            Vec::new()
        } else {
            (0..n).map(|_| Default::default()).collect()
        };
        for i in 0..n as usize {
            pos += unmarshal_mcd_char_t(&buf[pos..], &mut obj.host[i]);
        }
    }
    pos += unmarshal_mcd_bool_t(&buf[pos..], &mut obj.running);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.start_index);
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_servers);
    pos
}

pub fn free_mcd_qry_servers_args(obj: &mut mcd_qry_servers_args) {
    obj.host = Vec::new();
}

pub fn marshal_mcd_qry_servers_result(obj: &mcd_qry_servers_result, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_return_et(obj.ret, &mut buf[pos..]);
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_uint32_t(obj.num_servers, &mut buf[pos..]);
    }
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_uint32_t(obj.server_info_len, &mut buf[pos..]);
    }
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        {
            let n = (obj.server_info_len as u64) as u32;
            pos += wire_put_u32(n, &mut buf[pos..]);
            for i in 0..n as usize {
                pos += marshal_mcd_server_info_st(&obj.server_info[i], &mut buf[pos..]);
            }
        }
    }
    pos
}

pub fn unmarshal_mcd_qry_servers_result(buf: &[u8], obj: &mut mcd_qry_servers_result) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_return_et(&buf[pos..], &mut obj.ret);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_servers);
    } else {
        obj.num_servers = 0;
    }
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_uint32_t(&buf[pos..], &mut obj.server_info_len);
    } else {
        obj.server_info_len = 0;
    }
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        {
            let mut n = 0u32;
            pos += wire_get_u32(&buf[pos..], &mut n);
            obj.server_info = if n == 0 {
                Vec::new()
            } else {
                (0..n).map(|_| Default::default()).collect()
            };
            for i in 0..n as usize {
                pos += unmarshal_mcd_server_info_st(&buf[pos..], &mut obj.server_info[i]);
            }
        }
    } else {
        obj.server_info = Vec::new();
    }
    pos
}

pub fn free_mcd_qry_servers_result(obj: &mut mcd_qry_servers_result) {
    if (obj.ret as u64) == MCD_RET_ACT_NONE {
        obj.server_info = Vec::new();
    }
}

pub fn marshal_mcd_qry_trig_info_result(obj: &mcd_qry_trig_info_result, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_return_et(obj.ret, &mut buf[pos..]);
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_mcd_trig_info_st(&obj.trig_info, &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_qry_trig_info_result(buf: &[u8], obj: &mut mcd_qry_trig_info_result) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_return_et(&buf[pos..], &mut obj.ret);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_mcd_trig_info_st(&buf[pos..], &mut obj.trig_info);
    } else {
        obj.trig_info = Default::default();
    }
    pos
}

pub fn marshal_mcd_rpc_trig_st(obj: &mcd_rpc_trig_st, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint8_t(obj.is_simple_core, &mut buf[pos..]);
    let present = (obj.is_simple_core as u64) != 0;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_mcd_trig_simple_core_st(&obj.simple_core, &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_rpc_trig_st(buf: &[u8], obj: &mut mcd_rpc_trig_st) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint8_t(&buf[pos..], &mut obj.is_simple_core);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_mcd_trig_simple_core_st(&buf[pos..], &mut obj.simple_core);
    } else {
        obj.simple_core = Default::default();
    }
    pos
}

pub fn marshal_mcd_qry_trig_set_result(obj: &mcd_qry_trig_set_result, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_return_et(obj.ret, &mut buf[pos..]);
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_uint32_t(obj.num_trigs, &mut buf[pos..]);
    }
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_uint32_t(obj.trig_ids_len, &mut buf[pos..]);
    }
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        {
            let n = (obj.trig_ids_len as u64) as u32;
            pos += wire_put_u32(n, &mut buf[pos..]);
            for i in 0..n as usize {
                pos += marshal_uint32_t(obj.trig_ids[i], &mut buf[pos..]);
            }
        }
    }
    pos
}

pub fn unmarshal_mcd_qry_trig_set_result(buf: &[u8], obj: &mut mcd_qry_trig_set_result) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_return_et(&buf[pos..], &mut obj.ret);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_uint32_t(&buf[pos..], &mut obj.num_trigs);
    } else {
        obj.num_trigs = 0;
    }
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_uint32_t(&buf[pos..], &mut obj.trig_ids_len);
    } else {
        obj.trig_ids_len = 0;
    }
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        {
            let mut n = 0u32;
            pos += wire_get_u32(&buf[pos..], &mut n);
            obj.trig_ids = if n == 0 {
                Vec::new()
            } else {
                (0..n).map(|_| Default::default()).collect()
            };
            for i in 0..n as usize {
                pos += unmarshal_uint32_t(&buf[pos..], &mut obj.trig_ids[i]);
            }
        }
    } else {
        obj.trig_ids = Vec::new();
    }
    pos
}

pub fn free_mcd_qry_trig_set_result(obj: &mut mcd_qry_trig_set_result) {
    if (obj.ret as u64) == MCD_RET_ACT_NONE {
        obj.trig_ids = Vec::new();
    }
}

pub fn marshal_mcd_execute_txlist_args(obj: &mcd_execute_txlist_args, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint32_t(obj.core_uid, &mut buf[pos..]);
    pos += marshal_mcd_txlist_st(&obj.txlist, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_execute_txlist_args(buf: &[u8], obj: &mut mcd_execute_txlist_args) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.core_uid);
    pos += unmarshal_mcd_txlist_st(&buf[pos..], &mut obj.txlist);
    pos
}

pub fn free_mcd_execute_txlist_args(obj: &mut mcd_execute_txlist_args) {
    free_mcd_txlist_st(&mut obj.txlist);
}

pub fn marshal_mcd_execute_txlist_result(obj: &mcd_execute_txlist_result, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_mcd_return_et(obj.ret, &mut buf[pos..]);
    let present = (obj.ret as u64) == MCD_RET_ACT_NONE;
    pos += wire_put_u8(present as u8, &mut buf[pos..]);
    if present {
        pos += marshal_mcd_txlist_st(&obj.txlist, &mut buf[pos..]);
    }
    pos
}

pub fn unmarshal_mcd_execute_txlist_result(buf: &[u8], obj: &mut mcd_execute_txlist_result) -> usize {
    let mut pos = 0;
    pos += unmarshal_mcd_return_et(&buf[pos..], &mut obj.ret);
    let mut present = 0u8;
    pos += wire_get_u8(&buf[pos..], &mut present);
    if present != 0 {
        pos += unmarshal_mcd_txlist_st(&buf[pos..], &mut obj.txlist);
    } else {
        obj.txlist = Default::default();
    }
    pos
}

pub fn free_mcd_execute_txlist_result(obj: &mut mcd_execute_txlist_result) {
    if (obj.ret as u64) == MCD_RET_ACT_NONE {
        free_mcd_txlist_st(&mut obj.txlist);
    }
}

pub fn marshal_mcd_run_args(obj: &mcd_run_args, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    pos += marshal_uint32_t(obj.core_uid, &mut buf[pos..]);
    pos += marshal_mcd_bool_t(obj.global, &mut buf[pos..]);
    pos
}

pub fn unmarshal_mcd_run_args(buf: &[u8], obj: &mut mcd_run_args) -> usize {
    let mut pos = 0;
    pos += unmarshal_uint32_t(&buf[pos..], &mut obj.core_uid);
    pos += unmarshal_mcd_bool_t(&buf[pos..], &mut obj.global);
    pos
}

