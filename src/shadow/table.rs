//! The flat list of shadowed MPI entry points, one `shadow_fn!`/
//! `passthrough_fn!` invocation per entry, grouped to match the "Covered
//! surface" paragraph of the bootstrap/partitioning protocol this library
//! implements.

#![allow(clippy::too_many_arguments)]

use std::os::raw::{c_char, c_int, c_void};

use commsplit_sys::{
    MPI_Aint, MPI_Comm, MPI_Datatype, MPI_Errhandler, MPI_File, MPI_Group, MPI_Info, MPI_Message,
    MPI_Op, MPI_Request, MPI_Status, MPI_Win,
};

use super::{passthrough_fn, shadow_fn};

shadow_fn! {
    // Point-to-point: blocking, buffered, synchronous, ready sends; blocking
    // receive; their nonblocking and persistent-request twins; probe forms.
    fn MPI_Send(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                tag: c_int, comm: MPI_Comm) -> c_int => PMPI_Send [comm];

    fn MPI_Recv(buf: *mut c_void, count: c_int, datatype: MPI_Datatype, source: c_int,
                tag: c_int, comm: MPI_Comm, status: *mut MPI_Status) -> c_int
        => PMPI_Recv [comm];

    fn MPI_Bsend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                 tag: c_int, comm: MPI_Comm) -> c_int => PMPI_Bsend [comm];

    fn MPI_Ssend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                 tag: c_int, comm: MPI_Comm) -> c_int => PMPI_Ssend [comm];

    fn MPI_Rsend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                 tag: c_int, comm: MPI_Comm) -> c_int => PMPI_Rsend [comm];

    fn MPI_Isend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                 tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Isend [comm];

    fn MPI_Ibsend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                  tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ibsend [comm];

    fn MPI_Issend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                  tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Issend [comm];

    fn MPI_Irsend(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                  tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Irsend [comm];

    fn MPI_Irecv(buf: *mut c_void, count: c_int, datatype: MPI_Datatype, source: c_int,
                 tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Irecv [comm];

    fn MPI_Probe(source: c_int, tag: c_int, comm: MPI_Comm, status: *mut MPI_Status) -> c_int
        => PMPI_Probe [comm];

    fn MPI_Iprobe(source: c_int, tag: c_int, comm: MPI_Comm, flag: *mut c_int,
                  status: *mut MPI_Status) -> c_int => PMPI_Iprobe [comm];

    fn MPI_Mprobe(source: c_int, tag: c_int, comm: MPI_Comm, message: *mut MPI_Message,
                  status: *mut MPI_Status) -> c_int => PMPI_Mprobe [comm];

    fn MPI_Improbe(source: c_int, tag: c_int, comm: MPI_Comm, flag: *mut c_int,
                   message: *mut MPI_Message, status: *mut MPI_Status) -> c_int
        => PMPI_Improbe [comm];

    fn MPI_Send_init(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                      tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Send_init [comm];

    fn MPI_Bsend_init(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                       tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Bsend_init [comm];

    fn MPI_Ssend_init(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                       tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ssend_init [comm];

    fn MPI_Rsend_init(buf: *const c_void, count: c_int, datatype: MPI_Datatype, dest: c_int,
                       tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Rsend_init [comm];

    fn MPI_Recv_init(buf: *mut c_void, count: c_int, datatype: MPI_Datatype, source: c_int,
                      tag: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Recv_init [comm];

    fn MPI_Sendrecv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                     dest: c_int, sendtag: c_int, recvbuf: *mut c_void, recvcount: c_int,
                     recvtype: MPI_Datatype, source: c_int, recvtag: c_int, comm: MPI_Comm,
                     status: *mut MPI_Status) -> c_int => PMPI_Sendrecv [comm];

    fn MPI_Sendrecv_replace(buf: *mut c_void, count: c_int, datatype: MPI_Datatype,
                             dest: c_int, sendtag: c_int, source: c_int, recvtag: c_int,
                             comm: MPI_Comm, status: *mut MPI_Status) -> c_int
        => PMPI_Sendrecv_replace [comm];

    // Pack/unpack.
    fn MPI_Pack(inbuf: *const c_void, incount: c_int, datatype: MPI_Datatype,
                outbuf: *mut c_void, outsize: c_int, position: *mut c_int, comm: MPI_Comm)
        -> c_int => PMPI_Pack [comm];

    fn MPI_Unpack(inbuf: *const c_void, insize: c_int, position: *mut c_int,
                  outbuf: *mut c_void, outcount: c_int, datatype: MPI_Datatype, comm: MPI_Comm)
        -> c_int => PMPI_Unpack [comm];

    fn MPI_Pack_size(incount: c_int, datatype: MPI_Datatype, comm: MPI_Comm, size: *mut c_int)
        -> c_int => PMPI_Pack_size [comm];

    // Collectives.
    fn MPI_Barrier(comm: MPI_Comm) -> c_int => PMPI_Barrier [comm];

    fn MPI_Bcast(buffer: *mut c_void, count: c_int, datatype: MPI_Datatype, root: c_int,
                 comm: MPI_Comm) -> c_int => PMPI_Bcast [comm];

    fn MPI_Gather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                  recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype, root: c_int,
                  comm: MPI_Comm) -> c_int => PMPI_Gather [comm];

    fn MPI_Gatherv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                   recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int,
                   recvtype: MPI_Datatype, root: c_int, comm: MPI_Comm) -> c_int
        => PMPI_Gatherv [comm];

    fn MPI_Scatter(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                   recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype, root: c_int,
                   comm: MPI_Comm) -> c_int => PMPI_Scatter [comm];

    fn MPI_Scatterv(sendbuf: *const c_void, sendcounts: *const c_int, displs: *const c_int,
                    sendtype: MPI_Datatype, recvbuf: *mut c_void, recvcount: c_int,
                    recvtype: MPI_Datatype, root: c_int, comm: MPI_Comm) -> c_int
        => PMPI_Scatterv [comm];

    fn MPI_Allgather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                      recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                      comm: MPI_Comm) -> c_int => PMPI_Allgather [comm];

    fn MPI_Allgatherv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                       recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int,
                       recvtype: MPI_Datatype, comm: MPI_Comm) -> c_int
        => PMPI_Allgatherv [comm];

    fn MPI_Alltoall(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                     recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                     comm: MPI_Comm) -> c_int => PMPI_Alltoall [comm];

    fn MPI_Alltoallv(sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int,
                      sendtype: MPI_Datatype, recvbuf: *mut c_void, recvcounts: *const c_int,
                      rdispls: *const c_int, recvtype: MPI_Datatype, comm: MPI_Comm) -> c_int
        => PMPI_Alltoallv [comm];

    fn MPI_Alltoallw(sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int,
                      sendtypes: *const MPI_Datatype, recvbuf: *mut c_void,
                      recvcounts: *const c_int, rdispls: *const c_int,
                      recvtypes: *const MPI_Datatype, comm: MPI_Comm) -> c_int
        => PMPI_Alltoallw [comm];

    fn MPI_Exscan(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                  datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm) -> c_int
        => PMPI_Exscan [comm];

    fn MPI_Reduce(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                  datatype: MPI_Datatype, op: MPI_Op, root: c_int, comm: MPI_Comm) -> c_int
        => PMPI_Reduce [comm];

    fn MPI_Allreduce(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                      datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm) -> c_int
        => PMPI_Allreduce [comm];

    fn MPI_Reduce_scatter(sendbuf: *const c_void, recvbuf: *mut c_void,
                           recvcounts: *const c_int, datatype: MPI_Datatype, op: MPI_Op,
                           comm: MPI_Comm) -> c_int => PMPI_Reduce_scatter [comm];

    fn MPI_Reduce_scatter_block(sendbuf: *const c_void, recvbuf: *mut c_void, recvcount: c_int,
                                 datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm) -> c_int
        => PMPI_Reduce_scatter_block [comm];

    fn MPI_Scan(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm) -> c_int
        => PMPI_Scan [comm];

    // Nonblocking twins of the collectives above.
    fn MPI_Ibarrier(comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ibarrier [comm];

    fn MPI_Ibcast(buffer: *mut c_void, count: c_int, datatype: MPI_Datatype, root: c_int,
                  comm: MPI_Comm, request: *mut MPI_Request) -> c_int => PMPI_Ibcast [comm];

    fn MPI_Igather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                   recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype, root: c_int,
                   comm: MPI_Comm, request: *mut MPI_Request) -> c_int => PMPI_Igather [comm];

    fn MPI_Igatherv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                     recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int,
                     recvtype: MPI_Datatype, root: c_int, comm: MPI_Comm,
                     request: *mut MPI_Request) -> c_int => PMPI_Igatherv [comm];

    fn MPI_Iscatter(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                     recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                     root: c_int, comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Iscatter [comm];

    fn MPI_Iscatterv(sendbuf: *const c_void, sendcounts: *const c_int, displs: *const c_int,
                      sendtype: MPI_Datatype, recvbuf: *mut c_void, recvcount: c_int,
                      recvtype: MPI_Datatype, root: c_int, comm: MPI_Comm,
                      request: *mut MPI_Request) -> c_int => PMPI_Iscatterv [comm];

    fn MPI_Iallgather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                       recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                       comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Iallgather [comm];

    fn MPI_Iallgatherv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                        recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int,
                        recvtype: MPI_Datatype, comm: MPI_Comm, request: *mut MPI_Request)
        -> c_int => PMPI_Iallgatherv [comm];

    fn MPI_Ialltoall(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                      recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                      comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ialltoall [comm];

    fn MPI_Ialltoallv(sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int,
                       sendtype: MPI_Datatype, recvbuf: *mut c_void, recvcounts: *const c_int,
                       rdispls: *const c_int, recvtype: MPI_Datatype, comm: MPI_Comm,
                       request: *mut MPI_Request) -> c_int => PMPI_Ialltoallv [comm];

    fn MPI_Ialltoallw(sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int,
                       sendtypes: *const MPI_Datatype, recvbuf: *mut c_void,
                       recvcounts: *const c_int, rdispls: *const c_int,
                       recvtypes: *const MPI_Datatype, comm: MPI_Comm,
                       request: *mut MPI_Request) -> c_int => PMPI_Ialltoallw [comm];

    fn MPI_Ireduce(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                   datatype: MPI_Datatype, op: MPI_Op, root: c_int, comm: MPI_Comm,
                   request: *mut MPI_Request) -> c_int => PMPI_Ireduce [comm];

    fn MPI_Iallreduce(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                       datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm,
                       request: *mut MPI_Request) -> c_int => PMPI_Iallreduce [comm];

    fn MPI_Ireduce_scatter(sendbuf: *const c_void, recvbuf: *mut c_void,
                            recvcounts: *const c_int, datatype: MPI_Datatype, op: MPI_Op,
                            comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ireduce_scatter [comm];

    fn MPI_Ireduce_scatter_block(sendbuf: *const c_void, recvbuf: *mut c_void, recvcount: c_int,
                                  datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm,
                                  request: *mut MPI_Request) -> c_int
        => PMPI_Ireduce_scatter_block [comm];

    fn MPI_Iscan(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                 datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm, request: *mut MPI_Request)
        -> c_int => PMPI_Iscan [comm];

    fn MPI_Iexscan(sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int,
                    datatype: MPI_Datatype, op: MPI_Op, comm: MPI_Comm,
                    request: *mut MPI_Request) -> c_int => PMPI_Iexscan [comm];

    // Neighborhood collectives and their vector/heterogeneous/nonblocking forms.
    fn MPI_Neighbor_allgather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                               recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                               comm: MPI_Comm) -> c_int => PMPI_Neighbor_allgather [comm];

    fn MPI_Neighbor_allgatherv(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                                recvbuf: *mut c_void, recvcounts: *const c_int,
                                displs: *const c_int, recvtype: MPI_Datatype, comm: MPI_Comm)
        -> c_int => PMPI_Neighbor_allgatherv [comm];

    fn MPI_Neighbor_alltoall(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                              recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                              comm: MPI_Comm) -> c_int => PMPI_Neighbor_alltoall [comm];

    fn MPI_Neighbor_alltoallv(sendbuf: *const c_void, sendcounts: *const c_int,
                               sdispls: *const c_int, sendtype: MPI_Datatype,
                               recvbuf: *mut c_void, recvcounts: *const c_int,
                               rdispls: *const c_int, recvtype: MPI_Datatype, comm: MPI_Comm)
        -> c_int => PMPI_Neighbor_alltoallv [comm];

    fn MPI_Neighbor_alltoallw(sendbuf: *const c_void, sendcounts: *const c_int,
                               sdispls: *const MPI_Aint, sendtypes: *const MPI_Datatype,
                               recvbuf: *mut c_void, recvcounts: *const c_int,
                               rdispls: *const MPI_Aint, recvtypes: *const MPI_Datatype,
                               comm: MPI_Comm) -> c_int => PMPI_Neighbor_alltoallw [comm];

    fn MPI_Ineighbor_allgather(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                                recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                                comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ineighbor_allgather [comm];

    fn MPI_Ineighbor_allgatherv(sendbuf: *const c_void, sendcount: c_int,
                                 sendtype: MPI_Datatype, recvbuf: *mut c_void,
                                 recvcounts: *const c_int, displs: *const c_int,
                                 recvtype: MPI_Datatype, comm: MPI_Comm,
                                 request: *mut MPI_Request) -> c_int
        => PMPI_Ineighbor_allgatherv [comm];

    fn MPI_Ineighbor_alltoall(sendbuf: *const c_void, sendcount: c_int, sendtype: MPI_Datatype,
                               recvbuf: *mut c_void, recvcount: c_int, recvtype: MPI_Datatype,
                               comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ineighbor_alltoall [comm];

    fn MPI_Ineighbor_alltoallv(sendbuf: *const c_void, sendcounts: *const c_int,
                                sdispls: *const c_int, sendtype: MPI_Datatype,
                                recvbuf: *mut c_void, recvcounts: *const c_int,
                                rdispls: *const c_int, recvtype: MPI_Datatype, comm: MPI_Comm,
                                request: *mut MPI_Request) -> c_int
        => PMPI_Ineighbor_alltoallv [comm];

    fn MPI_Ineighbor_alltoallw(sendbuf: *const c_void, sendcounts: *const c_int,
                                sdispls: *const MPI_Aint, sendtypes: *const MPI_Datatype,
                                recvbuf: *mut c_void, recvcounts: *const c_int,
                                rdispls: *const MPI_Aint, recvtypes: *const MPI_Datatype,
                                comm: MPI_Comm, request: *mut MPI_Request) -> c_int
        => PMPI_Ineighbor_alltoallw [comm];

    // Group and communicator inspection.
    fn MPI_Comm_group(comm: MPI_Comm, group: *mut MPI_Group) -> c_int
        => PMPI_Comm_group [comm];

    fn MPI_Comm_size(comm: MPI_Comm, size: *mut c_int) -> c_int => PMPI_Comm_size [comm];

    fn MPI_Comm_rank(comm: MPI_Comm, rank: *mut c_int) -> c_int => PMPI_Comm_rank [comm];

    fn MPI_Comm_compare(comm1: MPI_Comm, comm2: MPI_Comm, result: *mut c_int) -> c_int
        => PMPI_Comm_compare [comm1, comm2];

    // Communicator construction. `MPI_Comm_free`/`MPI_Comm_disconnect` are
    // deliberately absent here — see `passthrough_fn!` below.
    fn MPI_Comm_dup(comm: MPI_Comm, newcomm: *mut MPI_Comm) -> c_int
        => PMPI_Comm_dup [comm];

    fn MPI_Comm_dup_with_info(comm: MPI_Comm, info: MPI_Info, newcomm: *mut MPI_Comm) -> c_int
        => PMPI_Comm_dup_with_info [comm];

    fn MPI_Comm_idup(comm: MPI_Comm, newcomm: *mut MPI_Comm, request: *mut MPI_Request)
        -> c_int => PMPI_Comm_idup [comm];

    fn MPI_Comm_create(comm: MPI_Comm, group: MPI_Group, newcomm: *mut MPI_Comm) -> c_int
        => PMPI_Comm_create [comm];

    fn MPI_Comm_create_group(comm: MPI_Comm, group: MPI_Group, tag: c_int,
                              newcomm: *mut MPI_Comm) -> c_int
        => PMPI_Comm_create_group [comm];

    fn MPI_Comm_split(comm: MPI_Comm, color: c_int, key: c_int, newcomm: *mut MPI_Comm)
        -> c_int => PMPI_Comm_split [comm];

    fn MPI_Comm_split_type(comm: MPI_Comm, split_type: c_int, key: c_int, info: MPI_Info,
                            newcomm: *mut MPI_Comm) -> c_int
        => PMPI_Comm_split_type [comm];

    // Intercommunicator operations.
    fn MPI_Comm_test_inter(comm: MPI_Comm, flag: *mut c_int) -> c_int
        => PMPI_Comm_test_inter [comm];

    fn MPI_Comm_remote_size(comm: MPI_Comm, size: *mut c_int) -> c_int
        => PMPI_Comm_remote_size [comm];

    fn MPI_Comm_remote_group(comm: MPI_Comm, group: *mut MPI_Group) -> c_int
        => PMPI_Comm_remote_group [comm];

    fn MPI_Intercomm_create(local_comm: MPI_Comm, local_leader: c_int, peer_comm: MPI_Comm,
                             remote_leader: c_int, tag: c_int, newintercomm: *mut MPI_Comm)
        -> c_int => PMPI_Intercomm_create [local_comm, peer_comm];

    fn MPI_Intercomm_merge(intercomm: MPI_Comm, high: c_int, newintracomm: *mut MPI_Comm)
        -> c_int => PMPI_Intercomm_merge [intercomm];

    // Attribute operations (the default dup callback, `MPI_DUP_FN`, is
    // deliberately omitted — its profiling twin is not universally
    // available and its behavior doesn't depend on the communicator value).
    fn MPI_Attr_put(comm: MPI_Comm, keyval: c_int, attribute_val: *mut c_void) -> c_int
        => PMPI_Attr_put [comm];

    fn MPI_Attr_get(comm: MPI_Comm, keyval: c_int, attribute_val: *mut c_void,
                     flag: *mut c_int) -> c_int => PMPI_Attr_get [comm];

    fn MPI_Attr_delete(comm: MPI_Comm, keyval: c_int) -> c_int => PMPI_Attr_delete [comm];

    fn MPI_Comm_set_attr(comm: MPI_Comm, comm_keyval: c_int, attribute_val: *mut c_void)
        -> c_int => PMPI_Comm_set_attr [comm];

    fn MPI_Comm_get_attr(comm: MPI_Comm, comm_keyval: c_int, attribute_val: *mut c_void,
                          flag: *mut c_int) -> c_int => PMPI_Comm_get_attr [comm];

    fn MPI_Comm_delete_attr(comm: MPI_Comm, comm_keyval: c_int) -> c_int
        => PMPI_Comm_delete_attr [comm];

    fn MPI_Comm_get_name(comm: MPI_Comm, comm_name: *mut c_char, resultlen: *mut c_int)
        -> c_int => PMPI_Comm_get_name [comm];

    fn MPI_Comm_set_name(comm: MPI_Comm, comm_name: *const c_char) -> c_int
        => PMPI_Comm_set_name [comm];

    fn MPI_Comm_set_info(comm: MPI_Comm, info: MPI_Info) -> c_int
        => PMPI_Comm_set_info [comm];

    fn MPI_Comm_get_info(comm: MPI_Comm, info: *mut MPI_Info) -> c_int
        => PMPI_Comm_get_info [comm];

    // Topology: Cartesian and graph creation, inspection, shifts, submapping.
    fn MPI_Topo_test(comm: MPI_Comm, status: *mut c_int) -> c_int => PMPI_Topo_test [comm];

    fn MPI_Cart_create(comm_old: MPI_Comm, ndims: c_int, dims: *const c_int,
                        periods: *const c_int, reorder: c_int, comm_cart: *mut MPI_Comm)
        -> c_int => PMPI_Cart_create [comm_old];

    fn MPI_Cartdim_get(comm: MPI_Comm, ndims: *mut c_int) -> c_int
        => PMPI_Cartdim_get [comm];

    fn MPI_Cart_get(comm: MPI_Comm, maxdims: c_int, dims: *mut c_int, periods: *mut c_int,
                    coords: *mut c_int) -> c_int => PMPI_Cart_get [comm];

    fn MPI_Cart_rank(comm: MPI_Comm, coords: *const c_int, rank: *mut c_int) -> c_int
        => PMPI_Cart_rank [comm];

    fn MPI_Cart_coords(comm: MPI_Comm, rank: c_int, maxdims: c_int, coords: *mut c_int)
        -> c_int => PMPI_Cart_coords [comm];

    fn MPI_Cart_shift(comm: MPI_Comm, direction: c_int, disp: c_int, rank_source: *mut c_int,
                       rank_dest: *mut c_int) -> c_int => PMPI_Cart_shift [comm];

    fn MPI_Cart_sub(comm: MPI_Comm, remain_dims: *const c_int, newcomm: *mut MPI_Comm)
        -> c_int => PMPI_Cart_sub [comm];

    fn MPI_Cart_map(comm: MPI_Comm, ndims: c_int, dims: *const c_int, periods: *const c_int,
                     newrank: *mut c_int) -> c_int => PMPI_Cart_map [comm];

    fn MPI_Graph_create(comm_old: MPI_Comm, nnodes: c_int, indx: *const c_int,
                         edges: *const c_int, reorder: c_int, comm_graph: *mut MPI_Comm)
        -> c_int => PMPI_Graph_create [comm_old];

    fn MPI_Graphdims_get(comm: MPI_Comm, nnodes: *mut c_int, nedges: *mut c_int) -> c_int
        => PMPI_Graphdims_get [comm];

    fn MPI_Graph_get(comm: MPI_Comm, maxindex: c_int, maxedges: c_int, indx: *mut c_int,
                       edges: *mut c_int) -> c_int => PMPI_Graph_get [comm];

    fn MPI_Graph_neighbors_count(comm: MPI_Comm, rank: c_int, nneighbors: *mut c_int)
        -> c_int => PMPI_Graph_neighbors_count [comm];

    fn MPI_Graph_neighbors(comm: MPI_Comm, rank: c_int, maxneighbors: c_int,
                             neighbors: *mut c_int) -> c_int
        => PMPI_Graph_neighbors [comm];

    fn MPI_Graph_map(comm: MPI_Comm, nnodes: c_int, indx: *const c_int, edges: *const c_int,
                      newrank: *mut c_int) -> c_int => PMPI_Graph_map [comm];

    // Distributed-graph adjacent and edge-list forms and their neighbor queries.
    fn MPI_Dist_graph_create_adjacent(comm_old: MPI_Comm, indegree: c_int,
                                       sources: *const c_int, sourceweights: *const c_int,
                                       outdegree: c_int, destinations: *const c_int,
                                       destweights: *const c_int, info: MPI_Info,
                                       reorder: c_int, comm_dist_graph: *mut MPI_Comm)
        -> c_int => PMPI_Dist_graph_create_adjacent [comm_old];

    fn MPI_Dist_graph_create(comm_old: MPI_Comm, n: c_int, sources: *const c_int,
                              degrees: *const c_int, destinations: *const c_int,
                              weights: *const c_int, info: MPI_Info, reorder: c_int,
                              comm_dist_graph: *mut MPI_Comm) -> c_int
        => PMPI_Dist_graph_create [comm_old];

    fn MPI_Dist_graph_neighbors_count(comm: MPI_Comm, indegree: *mut c_int,
                                       outdegree: *mut c_int, weighted: *mut c_int) -> c_int
        => PMPI_Dist_graph_neighbors_count [comm];

    fn MPI_Dist_graph_neighbors(comm: MPI_Comm, maxindegree: c_int, sources: *mut c_int,
                                 sourceweights: *mut c_int, maxoutdegree: c_int,
                                 destinations: *mut c_int, destweights: *mut c_int) -> c_int
        => PMPI_Dist_graph_neighbors [comm];

    // Error-handler binding: per-comm get/set, legacy set/get, call-errhandler, abort.
    fn MPI_Errhandler_set(comm: MPI_Comm, errhandler: MPI_Errhandler) -> c_int
        => PMPI_Errhandler_set [comm];

    fn MPI_Errhandler_get(comm: MPI_Comm, errhandler: *mut MPI_Errhandler) -> c_int
        => PMPI_Errhandler_get [comm];

    fn MPI_Comm_set_errhandler(comm: MPI_Comm, errhandler: MPI_Errhandler) -> c_int
        => PMPI_Comm_set_errhandler [comm];

    fn MPI_Comm_get_errhandler(comm: MPI_Comm, errhandler: *mut MPI_Errhandler) -> c_int
        => PMPI_Comm_get_errhandler [comm];

    fn MPI_Comm_call_errhandler(comm: MPI_Comm, errorcode: c_int) -> c_int
        => PMPI_Comm_call_errhandler [comm];

    fn MPI_Abort(comm: MPI_Comm, errorcode: c_int) -> c_int => PMPI_Abort [comm];

    // Connection management.
    fn MPI_Comm_connect(port_name: *const c_char, info: MPI_Info, root: c_int, comm: MPI_Comm,
                         newcomm: *mut MPI_Comm) -> c_int => PMPI_Comm_connect [comm];

    fn MPI_Comm_spawn(command: *const c_char, argv: *mut *mut c_char, maxprocs: c_int,
                       info: MPI_Info, root: c_int, comm: MPI_Comm, intercomm: *mut MPI_Comm,
                       array_of_errcodes: *mut c_int) -> c_int => PMPI_Comm_spawn [comm];

    fn MPI_Comm_spawn_multiple(count: c_int, array_of_commands: *mut *mut c_char,
                                array_of_argv: *mut *mut *mut c_char,
                                array_of_maxprocs: *const c_int,
                                array_of_info: *const MPI_Info, root: c_int, comm: MPI_Comm,
                                intercomm: *mut MPI_Comm, array_of_errcodes: *mut c_int)
        -> c_int => PMPI_Comm_spawn_multiple [comm];

    // One-sided window creation.
    fn MPI_Win_create(base: *mut c_void, size: MPI_Aint, disp_unit: c_int, info: MPI_Info,
                       comm: MPI_Comm, win: *mut MPI_Win) -> c_int
        => PMPI_Win_create [comm];

    fn MPI_Win_allocate(size: MPI_Aint, disp_unit: c_int, info: MPI_Info, comm: MPI_Comm,
                          baseptr: *mut c_void, win: *mut MPI_Win) -> c_int
        => PMPI_Win_allocate [comm];

    fn MPI_Win_allocate_shared(size: MPI_Aint, disp_unit: c_int, info: MPI_Info,
                                 comm: MPI_Comm, baseptr: *mut c_void, win: *mut MPI_Win)
        -> c_int => PMPI_Win_allocate_shared [comm];

    fn MPI_Win_create_dynamic(info: MPI_Info, comm: MPI_Comm, win: *mut MPI_Win) -> c_int
        => PMPI_Win_create_dynamic [comm];

    // File open.
    fn MPI_File_open(comm: MPI_Comm, filename: *const c_char, amode: c_int, info: MPI_Info,
                       fh: *mut MPI_File) -> c_int => PMPI_File_open [comm];

    // Fault-tolerance extensions: failed-group query, any-source re-enable.
    fn MPIX_Comm_group_failed(comm: MPI_Comm, failed_group: *mut MPI_Group) -> c_int
        => PMPIX_Comm_group_failed [comm];

    fn MPIX_Comm_remote_group_failed(comm: MPI_Comm, failed_group: *mut MPI_Group) -> c_int
        => PMPIX_Comm_remote_group_failed [comm];

    fn MPIX_Comm_reenable_anysource(comm: MPI_Comm, failed_group: *mut MPI_Group) -> c_int
        => PMPIX_Comm_reenable_anysource [comm];
}

passthrough_fn! {
    // These never translate their communicator, even if the caller passes
    // `MPI_COMM_WORLD`: `SPLIT_COMM` is library-owned and freed only by the
    // finalize orchestrator, never by the application's own free call.
    fn MPI_Comm_free(comm: *mut MPI_Comm) -> c_int => PMPI_Comm_free;

    fn MPI_Comm_disconnect(comm: *mut MPI_Comm) -> c_int => PMPI_Comm_disconnect;
}
